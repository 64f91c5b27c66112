//! Renders ledger entries as a paginated PDF report.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_decimal::Decimal;

use crate::{models::LedgerEntry, Error};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 11.0;

/// Render `entries` as an A4 PDF report titled `title`.
///
/// Each entry takes one line (`date | category | kind | amount`); a new page
/// is started whenever a line would cross the bottom margin. The report ends
/// with a line carrying `total_expenses`.
///
/// # Errors
///
/// This function will return an [Error::PdfRenderError] if the document
/// could not be assembled.
pub fn render_report(
    title: &str,
    entries: &[LedgerEntry],
    total_expenses: Decimal,
) -> Result<Vec<u8>, Error> {
    let (document, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");

    // The built-in font avoids shipping font files with the server.
    let font = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;

    let mut layer = document.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(title, TITLE_FONT_SIZE, Mm(MARGIN_MM), Mm(y), &font);
    y -= 2.0 * LINE_HEIGHT_MM;

    for entry in entries {
        if y < MARGIN_MM {
            let (page, new_layer) =
                document.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            layer = document.get_page(page).get_layer(new_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        let line = format!(
            "{} | {} | {} | {}",
            entry.date, entry.category, entry.kind, entry.amount
        );
        layer.use_text(line, BODY_FONT_SIZE, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }

    y -= LINE_HEIGHT_MM;
    if y < MARGIN_MM {
        let (page, new_layer) = document.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
        layer = document.get_page(page).get_layer(new_layer);
        y = PAGE_HEIGHT_MM - MARGIN_MM;
    }
    layer.use_text(
        format!("Total expenses: {total_expenses}"),
        BODY_FONT_SIZE,
        Mm(MARGIN_MM),
        Mm(y),
        &font,
    );

    document.save_to_bytes().map_err(pdf_error)
}

fn pdf_error(error: printpdf::Error) -> Error {
    Error::PdfRenderError(error.to_string())
}
