use std::io::Write;

use crate::error::Result;
use crate::model::SalesLog;

/// One line per day, oldest first: `2025-05-10: 3 tickets`.
pub fn render_sales_report(sales: &SalesLog) -> String {
    sales
        .iter()
        .map(|(date, count)| format!("{}: {} tickets", date, count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn total_tickets(sales: &SalesLog) -> i64 {
    sales.total()
}

pub fn write_sales_csv<W: Write>(sales: &SalesLog, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "tickets"])?;
    for (date, count) in sales.iter() {
        wtr.write_record([date, count.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SalesLog {
        let mut log = SalesLog::new();
        log.record("2025-05-11", 2);
        log.record("2025-05-10", 1);
        log
    }

    #[test]
    fn test_render_sales_report() {
        assert_eq!(
            render_sales_report(&sample()),
            "2025-05-10: 1 tickets\n2025-05-11: 2 tickets"
        );
        assert_eq!(render_sales_report(&SalesLog::new()), "");
        assert_eq!(total_tickets(&sample()), 3);
    }

    #[test]
    fn test_write_sales_csv() {
        let mut buf = Vec::new();
        write_sales_csv(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "date,tickets\n2025-05-10,1\n2025-05-11,2\n");
    }
}
