//! Chart sinks.
//!
//! The engine never draws anything itself. A [`ChartSink`] receives the
//! finished [`SpreadChart`] and presents it; the CLI ships a plain-text table
//! and a JSON writer.

use crate::chart::SpreadChart;
use crate::series::LegPnlSeries;
use crate::Result;
use std::io::Write;

/// Receives a finished chart for display.
pub trait ChartSink {
    fn render(&mut self, chart: &SpreadChart) -> Result<()>;
}

/// Fixed-width text table, one row per scenario price.
pub struct TableSink<W: Write> {
    writer: W,
    precision: usize,
    show_legs: bool,
}

impl<W: Write> TableSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precision: 2,
            show_legs: true,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_legs(mut self, show_legs: bool) -> Self {
        self.show_legs = show_legs;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_summary(&mut self, chart: &SpreadChart) -> Result<()> {
        let p = self.precision;
        let summary = &chart.summary;
        writeln!(self.writer)?;
        if let Some(point) = summary.max_profit {
            writeln!(
                self.writer,
                "Max profit: {:.p$} at {:.p$}",
                point.pnl, point.price
            )?;
        }
        if let Some(point) = summary.max_loss {
            writeln!(
                self.writer,
                "Max loss:   {:.p$} at {:.p$}",
                point.pnl, point.price
            )?;
        }
        if summary.breakevens.is_empty() {
            writeln!(self.writer, "Breakeven:  none in range")?;
        } else {
            let prices: Vec<String> = summary
                .breakevens
                .iter()
                .map(|price| format!("{price:.p$}"))
                .collect();
            writeln!(self.writer, "Breakeven:  {}", prices.join(", "))?;
        }
        Ok(())
    }
}

impl<W: Write> ChartSink for TableSink<W> {
    fn render(&mut self, chart: &SpreadChart) -> Result<()> {
        let p = self.precision;
        let legs: &[LegPnlSeries] = if self.show_legs { &chart.legs } else { &[] };

        let mut headers = vec![chart.x_label.clone()];
        headers.extend(
            legs.iter()
                .map(|leg| format!("{} ({:+})", leg.symbol, leg.quantity)),
        );
        headers.push(chart.y_label.clone());

        let rows: Vec<Vec<String>> = chart
            .series
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let mut row = vec![format!("{:.p$}", point.price)];
                row.extend(legs.iter().map(|leg| {
                    leg.series
                        .points()
                        .get(i)
                        .map_or_else(String::new, |lp| format!("{:.p$}", lp.pnl))
                }));
                row.push(format!("{:.p$}", point.pnl));
                row
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                rows.iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        writeln!(self.writer, "{} - {}", chart.title, chart.name)?;
        writeln!(self.writer)?;

        let header_line: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{h:>w$}"))
            .collect();
        writeln!(self.writer, "{}", header_line.join("  "))?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(self.writer, "{}", rule.join("  "))?;

        for row in &rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:>w$}"))
                .collect();
            writeln!(self.writer, "{}", line.join("  "))?;
        }

        if rows.is_empty() {
            writeln!(self.writer, "(no prices in range)")?;
        }

        self.write_summary(chart)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the chart as a JSON document.
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChartSink for JsonSink<W> {
    fn render(&mut self, chart: &SpreadChart) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, chart)?;
        } else {
            serde_json::to_writer(&mut self.writer, chart)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
