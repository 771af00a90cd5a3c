//! PDF emission over the block assembly.
//!
//! A4 portrait, built-in Helvetica faces, top-down cursor with page breaks.
//! All layout decisions live here; the content itself comes from
//! `content::build_blocks` untouched.

use log::debug;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::content::{build_blocks, fit_cell, wrap_text, Block};
use crate::document_model::ProposalData;
use crate::errors::RenderError;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 15.0;

/// Left edge of each fund-table column, in mm from the page edge.
const TABLE_COLUMNS: [f64; 6] = [15.0, 72.0, 104.0, 126.0, 147.0, 174.0];
/// Character capacity per table column at the table font size.
const TABLE_CELL_CHARS: [usize; 6] = [32, 18, 11, 10, 11, 14];

/// Characters per line for wrapped paragraph text.
const WRAP_CHARS: usize = 100;

struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Starts a fresh page when fewer than `needed` millimetres remain.
    fn ensure_room(&mut self, needed: f64) {
        if self.y - needed < MARGIN {
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH as _),
                Mm(PAGE_HEIGHT as _),
                "Layer 1",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn text(&mut self, font: &IndirectFontRef, size: f64, x: f64, text: &str, advance: f64) {
        self.ensure_room(advance);
        self.layer
            .use_text(text, size as _, Mm(x as _), Mm(self.y as _), font);
        self.y -= advance;
    }

    fn gap(&mut self, millimetres: f64) {
        self.y -= millimetres;
    }

    fn row(&mut self, font: &IndirectFontRef, size: f64, cells: &[String]) {
        self.ensure_room(5.0);
        let y = self.y;
        for (index, cell) in cells.iter().enumerate().take(TABLE_COLUMNS.len()) {
            let fitted = fit_cell(cell, TABLE_CELL_CHARS[index]);
            self.layer.use_text(
                fitted.as_str(),
                size as _,
                Mm(TABLE_COLUMNS[index] as _),
                Mm(y as _),
                font,
            );
        }
        self.y -= 5.0;
    }
}

/// Renders a proposal into PDF bytes.
///
/// Total for well-formed input: an empty fund selection renders an empty
/// table and a missing note renders nothing. Pure given its input; the
/// proposal date travels inside `data`.
pub fn render(data: &ProposalData) -> Result<Vec<u8>, RenderError> {
    let blocks = build_blocks(data);
    debug!("Rendering proposal document with {} blocks", blocks.len());

    let (doc, page, layer) = PdfDocument::new(
        "Investment Proposal",
        Mm(PAGE_WIDTH as _),
        Mm(PAGE_HEIGHT as _),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(backend)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(backend)?;
    let oblique = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(backend)?;

    let mut cursor = PageCursor::new(&doc, doc.get_page(page).get_layer(layer));

    for block in &blocks {
        match block {
            Block::Title(text) => {
                cursor.text(&bold, 24.0, MARGIN, text, 10.0);
            }
            Block::Subtitle(text) => {
                cursor.text(&regular, 11.0, MARGIN, text, 8.0);
            }
            Block::SectionHeading(text) => {
                cursor.gap(4.0);
                cursor.text(&bold, 12.0, MARGIN, text, 7.0);
            }
            Block::Text(text) => {
                for line in wrap_text(text, WRAP_CHARS) {
                    cursor.text(&regular, 10.0, MARGIN, &line, 5.0);
                }
            }
            Block::Bullet(text) => {
                for (index, line) in wrap_text(text, WRAP_CHARS).into_iter().enumerate() {
                    let prefix = if index == 0 { "- " } else { "  " };
                    cursor.text(&regular, 9.0, MARGIN, &format!("{}{}", prefix, line), 5.0);
                }
            }
            Block::TableHeader(cells) => {
                cursor.row(&bold, 9.0, cells);
            }
            Block::TableRow(cells) => {
                cursor.row(&regular, 8.0, cells);
            }
            Block::SmallPrint(text) => {
                cursor.gap(4.0);
                for line in wrap_text(text, WRAP_CHARS + 20) {
                    cursor.text(&oblique, 7.0, MARGIN, &line, 3.5);
                }
            }
        }
    }

    doc.save_to_bytes().map_err(backend)
}

fn backend(err: printpdf::Error) -> RenderError {
    RenderError::Backend(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::document_model::{AdvisorInfo, ClientInfo, FundLine};

    fn sample_data(fund_count: usize) -> ProposalData {
        ProposalData {
            advisor: AdvisorInfo {
                name: "Rajesh Kumar".to_string(),
                arn: "ARN-123456".to_string(),
                experience: 8,
                email: "rajesh.kumar@advisorplatform.com".to_string(),
                phone: "+91 9876 543 210".to_string(),
                aum: dec!(45000000),
            },
            client: ClientInfo {
                name: "Priya Sharma".to_string(),
                email: "priya@example.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                risk_profile: "Growth".to_string(),
                investment_goal: "Long-term wealth creation".to_string(),
            },
            selected_funds: (0..fund_count)
                .map(|i| FundLine {
                    name: format!("Fund {}", i),
                    category: "Large Cap Equity".to_string(),
                    returns_3y: 18.5,
                    risk_level: "Growth".to_string(),
                    expense_ratio: Some(1.2),
                    min_investment: Some(dec!(5000)),
                })
                .collect(),
            advisor_note: Some("Stay invested for at least five years.".to_string()),
            proposal_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_render_produces_a_pdf() {
        let bytes = render(&sample_data(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_render_is_total_for_empty_selection() {
        let mut data = sample_data(0);
        data.advisor_note = None;
        let bytes = render(&data).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_proposals_paginate() {
        // Enough rows to spill past one A4 page.
        let bytes = render(&sample_data(80)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
