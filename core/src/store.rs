//! SQLite access to the sales database.
//!
//! RULE: Only the store talks to the database. The report builder calls
//! store methods — it never executes SQL directly.
//!
//! "Today" in every query is the database's CURRENT_DATE (UTC), not the
//! process clock, so a run near midnight reports whatever day the
//! database considers current.

use crate::error::ReportResult;
use rusqlite::{params, Connection};

/// Book code for the cash sales channel.
pub const CASH_BOOK_CODE: &str = "SCA";
/// Book code for the credit sales channel.
pub const CREDIT_BOOK_CODE: &str = "SCR";

/// One row of a top-N ranking: entity name plus its aggregated amount.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSales {
    pub name: String,
    pub amount: f64,
}

pub struct SalesStore {
    conn: Connection,
}

impl SalesStore {
    pub fn open(path: &str) -> ReportResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ReportResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply the sales schema. Safe to run against an already-migrated
    /// database.
    pub fn migrate(&self) -> ReportResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_sales.sql"))?;
        Ok(())
    }

    // ── Report queries ─────────────────────────────────────────

    /// Today's cash sales total. `None` when no cash bill exists today.
    pub fn cash_sales(&self) -> ReportResult<Option<f64>> {
        self.sales_total(CASH_BOOK_CODE)
    }

    /// Today's credit sales total. `None` when no credit bill exists today.
    pub fn credit_sales(&self) -> ReportResult<Option<f64>> {
        self.sales_total(CREDIT_BOOK_CODE)
    }

    fn sales_total(&self, book_code: &str) -> ReportResult<Option<f64>> {
        // SUM over zero rows yields a single NULL row; keep that as a
        // typed Option rather than coercing to zero here.
        let total = self.conn.query_row(
            "SELECT SUM(bi.bill_total_amount)
             FROM bill bi
             JOIN book bo ON bi.book_id = bo.book_id
             WHERE bo.book_code = ?1 AND bi.bill_date = CURRENT_DATE",
            params![book_code],
            |r| r.get::<_, Option<f64>>(0),
        )?;
        Ok(total)
    }

    /// Top 3 customers by total bill amount across both sales channels
    /// today. Ties are broken by ascending customer name so the ranking
    /// is deterministic.
    pub fn top_customers(&self) -> ReportResult<Vec<RankedSales>> {
        self.ranked(
            "SELECT c.cust_name, SUM(bi.bill_total_amount) AS amount
             FROM bill bi
             JOIN book bo ON bi.book_id = bo.book_id
             JOIN customer c ON c.cust_id = bi.cust_id
             WHERE bo.book_code IN (?1, ?2) AND bi.bill_date = CURRENT_DATE
             GROUP BY c.cust_name
             ORDER BY amount DESC, c.cust_name ASC
             LIMIT 3",
        )
    }

    /// Top 3 products by summed line-item amount across both sales
    /// channels today. Same ordering rule as [`Self::top_customers`].
    pub fn top_products(&self) -> ReportResult<Vec<RankedSales>> {
        self.ranked(
            "SELECT p.prod_name, SUM(bd.amount) AS amount
             FROM bill bi
             JOIN bill_detail bd ON bi.bill_id = bd.bill_id
             JOIN book bo ON bi.book_id = bo.book_id
             JOIN product p ON p.prod_id = bd.prod_id
             WHERE bo.book_code IN (?1, ?2) AND bi.bill_date = CURRENT_DATE
             GROUP BY p.prod_name
             ORDER BY amount DESC, p.prod_name ASC
             LIMIT 3",
        )
    }

    fn ranked(&self, sql: &str) -> ReportResult<Vec<RankedSales>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![CASH_BOOK_CODE, CREDIT_BOOK_CODE], |r| {
            Ok(RankedSales {
                name: r.get(0)?,
                amount: r.get(1)?,
            })
        })?;
        let mut result = Vec::new();
        for r in rows {
            result.push(r?);
        }
        Ok(result)
    }

    // ── Writes (used by the POS side and by tests) ─────────────

    pub fn add_book(&self, book_code: &str) -> ReportResult<i64> {
        self.conn.execute(
            "INSERT INTO book (book_code) VALUES (?1)",
            params![book_code],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn add_customer(&self, cust_name: &str) -> ReportResult<i64> {
        self.conn.execute(
            "INSERT INTO customer (cust_name) VALUES (?1)",
            params![cust_name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn add_product(&self, prod_name: &str) -> ReportResult<i64> {
        self.conn.execute(
            "INSERT INTO product (prod_name) VALUES (?1)",
            params![prod_name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn add_bill(
        &self,
        book_id: i64,
        cust_id: Option<i64>,
        bill_date: &str,
        total_amount: f64,
    ) -> ReportResult<i64> {
        self.conn.execute(
            "INSERT INTO bill (book_id, cust_id, bill_date, bill_total_amount)
             VALUES (?1, ?2, ?3, ?4)",
            params![book_id, cust_id, bill_date, total_amount],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn add_bill_line(&self, bill_id: i64, prod_id: i64, amount: f64) -> ReportResult<i64> {
        self.conn.execute(
            "INSERT INTO bill_detail (bill_id, prod_id, amount) VALUES (?1, ?2, ?3)",
            params![bill_id, prod_id, amount],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}
