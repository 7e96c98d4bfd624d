//! Printable registration sheet: a numbered grid of registrations followed
//! by the committee chair's signature block. A4 portrait, builtin Helvetica.

use chrono::{Datelike, NaiveDate};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use crate::error::{Result, StorageError};
use crate::models::Participant;

pub const TITLE: &str = "Lembar Pendaftaran FLS3N-SD Tahun 2026";
pub const SUBTITLE: &str = "Kecamatan Beji Kabupaten Pasuruan";

const SIGNATORY_ROLE: &str = "Ketua FLS3N-SD Kec. Beji";
const SIGNATORY_NAME: &str = "LAILATUL FITRI, S.Pd.SD.";
const SIGNATORY_ID: &str = "NIP. 198406212014062001";

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const COLUMNS: [(&str, f32); 5] = [
    ("No.", 10.0),
    ("Nama Sekolah", 45.0),
    ("Nama Siswa", 45.0),
    ("Tempat Tgl Lahir", 40.0),
    ("Cabang Lomba", 45.0),
];

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 12.5;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;
const TABLE_TOP: f32 = PAGE_HEIGHT - 40.0;
const SIGNATURE_X: f32 = 130.0;
const SIGNATURE_HEIGHT: f32 = 55.0;

const FONT_SIZE: f32 = 10.0;
const LINE_HEIGHT: f32 = 4.5;
const CELL_PADDING: f32 = 1.5;
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

/// Date in the form printed above the signature, e.g. `19 Oktober 2026`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH * PT_TO_MM
}

/// Splits `text` into lines that fit a cell `width` millimetres wide.
/// Explicit line breaks are kept; a single overlong word is not split.
fn wrap(text: &str, width: f32) -> Vec<String> {
    let usable = width - 2.0 * CELL_PADDING;
    let max_chars = (usable / (FONT_SIZE * GLYPH_WIDTH * PT_TO_MM)).floor().max(1.0) as usize;

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn render_error(error: printpdf::Error) -> StorageError {
    StorageError::Render(error.to_string())
}

struct Sheet {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Top edge of the next thing to draw, in millimetres from the bottom.
    cursor: f32,
}

impl Sheet {
    fn new() -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;
        let layer = doc.get_page(page).get_layer(layer);
        layer.set_outline_thickness(0.3);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: TABLE_TOP,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.layer.set_outline_thickness(0.3);
        self.cursor = PAGE_HEIGHT - MARGIN_TOP;
    }

    fn text(&self, text: &str, size: f32, x: f32, y: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn centered(&self, text: &str, size: f32, y: f32, bold: bool) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.text(text, size, x, y, bold);
    }

    fn line(&self, from: (f32, f32), to: (f32, f32)) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(from.0), Mm(from.1)), false),
                (Point::new(Mm(to.0), Mm(to.1)), false),
            ],
            is_closed: false,
        });
    }

    fn heading(&self) {
        self.centered(TITLE, 14.0, PAGE_HEIGHT - 20.0, true);
        self.centered(SUBTITLE, 12.0, PAGE_HEIGHT - 28.0, true);
    }

    fn header_row(&mut self) {
        self.row(COLUMNS.map(|(title, _)| title), true);
    }

    /// Draws one grid row, starting a new page (with a fresh header) when the
    /// row would run into the bottom margin.
    fn row(&mut self, cells: [&str; 5], header: bool) {
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, width))| wrap(cell, width))
            .collect();
        let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        let height = line_count as f32 * LINE_HEIGHT + 2.0 * CELL_PADDING;

        if !header && self.cursor - height < MARGIN_BOTTOM {
            self.new_page();
            self.header_row();
        }

        let top = self.cursor;
        let bottom = top - height;
        let right = MARGIN_LEFT + COLUMNS.iter().map(|(_, width)| width).sum::<f32>();

        self.line((MARGIN_LEFT, top), (right, top));
        self.line((MARGIN_LEFT, bottom), (right, bottom));

        let mut x = MARGIN_LEFT;
        self.line((x, top), (x, bottom));
        for (lines, (index, (_, width))) in wrapped.iter().zip(COLUMNS.iter().enumerate()) {
            let centered = header || index == 0;
            let mut baseline = top - CELL_PADDING - FONT_SIZE * PT_TO_MM;
            for line in lines {
                let offset = if centered {
                    (width - text_width(line, FONT_SIZE)) / 2.0
                } else {
                    CELL_PADDING
                };
                self.text(line, FONT_SIZE, x + offset, baseline, header);
                baseline -= LINE_HEIGHT;
            }
            x += width;
            self.line((x, top), (x, bottom));
        }

        self.cursor = bottom;
    }

    fn signature(&mut self, issued: NaiveDate) {
        if self.cursor - SIGNATURE_HEIGHT < MARGIN_BOTTOM {
            self.new_page();
        }

        let y = self.cursor - 15.0;
        self.text(
            &format!("Pasuruan, {}", format_date(issued)),
            11.0,
            SIGNATURE_X,
            y,
            false,
        );
        self.text(SIGNATORY_ROLE, 11.0, SIGNATURE_X, y - 6.0, false);
        self.text(SIGNATORY_NAME, 11.0, SIGNATURE_X, y - 30.0, true);
        self.line(
            (SIGNATURE_X, y - 31.0),
            (SIGNATURE_X + text_width(SIGNATORY_NAME, 11.0), y - 31.0),
        );
        self.text(SIGNATORY_ID, 11.0, SIGNATURE_X, y - 37.0, false);

        self.cursor = y - 37.0;
    }
}

/// Renders the sheet for `participants` in the given order, dated `issued`.
pub fn render(participants: &[Participant], issued: NaiveDate) -> Result<Vec<u8>> {
    let mut sheet = Sheet::new()?;
    sheet.heading();
    sheet.header_row();

    for (index, participant) in participants.iter().enumerate() {
        let number = (index + 1).to_string();
        sheet.row(
            [
                number.as_str(),
                participant.school.as_str(),
                participant.participant_names.as_str(),
                participant.birth_details.as_str(),
                participant.category.as_str(),
            ],
            false,
        );
    }

    sheet.signature(issued);
    sheet.doc.save_to_bytes().map_err(render_error)
}
