//! The fixed letter template.

use crate::error::LetterError;
use chrono::Local;
use counsel_types::LetterData;
use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts};
use std::io::Cursor;

/// Fixed download filename offered to callers.
pub const LETTER_FILENAME: &str = "legal_letter.docx";

/// MIME type of the generated artifact.
pub const LETTER_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Rendered when the model supplied no letter body.
pub const MISSING_BODY_PLACEHOLDER: &str = "Content missing.";

/// Manual-fill marker for the recipient's address.
const ADDRESS_PLACEHOLDER: &str = "[Address - Please Fill Manually]";

/// Default font size in half-points (12pt).
const FONT_SIZE: usize = 24;

/// One paragraph of the letter, in template order.
struct Line {
    text: String,
    align: Option<AlignmentType>,
    bold: bool,
    underline: bool,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: None,
            bold: false,
            underline: false,
        }
    }
}

fn template(signatory: &str, data: &LetterData, date: &str) -> Vec<Line> {
    let body = data
        .formal_body
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .unwrap_or(MISSING_BODY_PLACEHOLDER);

    vec![
        Line {
            text: date.to_string(),
            align: Some(AlignmentType::Right),
            bold: false,
            underline: false,
        },
        Line::plain(format!("To: {}", data.recipient_type)),
        Line::plain(ADDRESS_PLACEHOLDER),
        Line::plain(""),
        Line::plain("Dear Sir/Madam,"),
        Line {
            text: format!(
                "SUBJECT: FORMAL NOTICE REGARDING {}",
                data.recipient_type.to_uppercase()
            ),
            align: Some(AlignmentType::Center),
            bold: true,
            underline: true,
        },
        Line {
            text: body.to_string(),
            align: Some(AlignmentType::Both),
            bold: false,
            underline: false,
        },
        Line::plain(""),
        Line::plain("Yours faithfully,"),
        Line::plain(""),
        Line::plain(signatory),
    ]
}

/// The letter's paragraph texts in template order.
///
/// This is the content contract the docx rendering wraps; tests assert
/// ordering and substitution here without unzipping OOXML.
pub fn letter_lines(signatory: &str, data: &LetterData, date: &str) -> Vec<String> {
    template(signatory, data, date)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

/// Renders the formal letter for today's date.
pub fn build_letter(signatory: &str, data: &LetterData) -> Result<Vec<u8>, LetterError> {
    let date = Local::now().format("%B %d, %Y").to_string();
    build_letter_for_date(signatory, data, &date)
}

/// Renders the formal letter with an explicit date string.
///
/// Deterministic: identical inputs produce identical bytes.
pub fn build_letter_for_date(
    signatory: &str,
    data: &LetterData,
    date: &str,
) -> Result<Vec<u8>, LetterError> {
    let mut docx = Docx::new()
        .default_fonts(RunFonts::new().ascii("Times New Roman"))
        .default_size(FONT_SIZE);

    for line in template(signatory, data, date) {
        let mut run = Run::new().add_text(line.text);
        if line.bold {
            run = run.bold();
        }
        if line.underline {
            run = run.underline("single");
        }
        let mut paragraph = Paragraph::new().add_run(run);
        if let Some(align) = line.align {
            paragraph = paragraph.align(align);
        }
        docx = docx.add_paragraph(paragraph);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| LetterError::Render(e.to_string()))?;

    tracing::debug!(recipient = %data.recipient_type, "letter rendered");

    Ok(buffer.into_inner())
}
