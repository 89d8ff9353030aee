use anyhow::{anyhow, Result};
use loadout_core::RawEntry;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const NUM_FIELDS: usize = 3;

/// An equipment table inside a parsed page.
pub struct HtmlTable {
    document: Html,
    rows: Selector,
}

impl HtmlTable {
    pub fn new(html: &str, row_selector: &str) -> Result<Self> {
        let rows = Selector::parse(row_selector)
            .map_err(|e| anyhow!("Invalid row selector {:?}: {}", row_selector, e))?;
        Ok(Self {
            document: Html::parse_document(html),
            rows,
        })
    }

    /// `(name, cost, weight)` for every row with exactly three cells and
    /// non-blank cost and weight cells. Category header rows fail that test
    /// and are dropped.
    pub fn entries(&self) -> Result<Vec<RawEntry>> {
        let cell = Selector::parse("td").map_err(|e| anyhow!("Invalid cell selector: {}", e))?;
        let mut entries = Vec::new();
        let mut num_rows = 0;
        for (i, row) in self.document.select(&self.rows).enumerate() {
            num_rows += 1;
            let cells: Vec<String> = row.select(&cell).map(cell_text).collect();
            if !valid_entry(&cells) {
                debug!("skipping row {}: {:?}", i, cells);
                continue;
            }
            let [name, cost, weight]: [String; NUM_FIELDS] = cells
                .try_into()
                .map_err(|_| anyhow!("Row {} does not have {} cells", i, NUM_FIELDS))?;
            if is_blank(&name) {
                return Err(anyhow!("Row {} has an empty name cell", i));
            }
            entries.push(RawEntry::new(name, cost, weight));
        }
        if num_rows == 0 {
            return Err(anyhow!("No rows matched the row selector"));
        }
        Ok(entries)
    }
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn valid_entry(cells: &[String]) -> bool {
    cells.len() == NUM_FIELDS && !is_blank(&cells[1]) && !is_blank(&cells[2])
}
