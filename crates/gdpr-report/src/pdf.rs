//! # PDF Writer
//!
//! Serializes laid out pages as a PDF 1.4 file: a catalog, a page tree, the
//! three Helvetica fonts with WinAnsi encoding, an info dictionary, one
//! uncompressed content stream per page, and a cross-reference table.
//!
//! Object numbers are fixed by position: 1 catalog, 2 page tree, 3-5 fonts,
//! 6 info, then a (page, content) pair per page starting at 7.

use gdpr_core::Timestamp;

use crate::font::{encode_win_ansi, unencodable, Font};
use crate::layout::{Op, Page, PAGE_HEIGHT, PAGE_WIDTH};

const CATALOG: usize = 1;
const PAGE_TREE: usize = 2;
const FIRST_FONT: usize = 3;
const INFO: usize = 6;
const FIRST_PAGE: usize = 7;

/// Document metadata written to the info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
    pub created: Timestamp,
}

/// Serialize `pages` into a complete PDF file.
pub fn write_pdf(pages: &[Page], info: &DocumentInfo) -> Vec<u8> {
    let replaced = replaced_characters(pages);
    if replaced > 0 {
        tracing::warn!(
            characters = replaced,
            "report text has characters outside WinAnsi; they print as '?'"
        );
    }
    let mut w = PdfWriter::default();
    w.raw("%PDF-1.4\n");
    // Binary marker so transfer tools treat the file as binary.
    w.bytes(b"%\xe2\xe3\xcf\xd3\n");

    w.object(CATALOG, &format!("<< /Type /Catalog /Pages {PAGE_TREE} 0 R >>"));

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_object(i)))
        .collect();
    w.object(
        PAGE_TREE,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
    );

    for (i, font) in Font::ALL.iter().enumerate() {
        w.object(
            FIRST_FONT + i,
            &format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            ),
        );
    }

    let created = info.created.as_datetime().format("D:%Y%m%d%H%M%SZ").to_string();
    w.object(
        INFO,
        &format!(
            "<< /Title {} /Producer {} /CreationDate {} >>",
            pdf_string(&info.title),
            pdf_string(&info.producer),
            pdf_string(&created)
        ),
    );

    let fonts: Vec<String> = Font::ALL
        .iter()
        .enumerate()
        .map(|(i, font)| format!("/{} {} 0 R", font.resource(), FIRST_FONT + i))
        .collect();
    let resources = format!("<< /Font << {} >> >>", fonts.join(" "));

    for (i, page) in pages.iter().enumerate() {
        let id = page_object(i);
        w.object(
            id,
            &format!(
                "<< /Type /Page /Parent {PAGE_TREE} 0 R /MediaBox [0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2}] /Resources {resources} /Contents {} 0 R >>",
                id + 1
            ),
        );
        w.stream(id + 1, &content_stream(page));
    }

    w.finish()
}

/// Characters across every text run that print as `?`.
fn replaced_characters(pages: &[Page]) -> usize {
    pages
        .iter()
        .flat_map(|page| &page.ops)
        .map(|op| match op {
            Op::Text { text, .. } => unencodable(text),
            _ => 0,
        })
        .sum()
}

fn page_object(index: usize) -> usize {
    FIRST_PAGE + 2 * index
}

/// A PDF literal string holding `text` in WinAnsi. Bytes outside ASCII are
/// written as octal escapes so the output stays 7-bit.
fn pdf_string(text: &str) -> String {
    let mut out = String::from("(");
    for byte in encode_win_ansi(text) {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(char::from(byte));
            }
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }
    out.push(')');
    out
}

fn content_stream(page: &Page) -> String {
    let mut out = String::new();
    for op in &page.ops {
        let line = match op {
            Op::Text {
                x,
                y,
                font,
                size,
                text,
            } => format!(
                "BT /{} {size:.2} Tf {x:.2} {y:.2} Td {} Tj ET\n",
                font.resource(),
                pdf_string(text)
            ),
            Op::Line { from, to, width } => format!(
                "{width:.2} w {:.2} {:.2} m {:.2} {:.2} l S\n",
                from.0, from.1, to.0, to.1
            ),
            Op::Rect {
                x,
                y,
                width,
                height,
            } => format!("0.5 G 0.50 w {x:.2} {y:.2} {width:.2} {height:.2} re S 0 G\n"),
        };
        out.push_str(&line);
    }
    out
}

#[derive(Default)]
struct PdfWriter {
    buf: Vec<u8>,
    /// Byte offset of object `n` at index `n - 1`.
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn raw(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    fn bytes(&mut self, b: &[u8]) {
        self.buf.extend_from_slice(b);
    }

    fn begin(&mut self, id: usize) {
        debug_assert_eq!(id, self.offsets.len() + 1, "objects must be written in order");
        self.offsets.push(self.buf.len());
        self.raw(&format!("{id} 0 obj\n"));
    }

    fn object(&mut self, id: usize, body: &str) {
        self.begin(id);
        self.raw(body);
        self.raw("\nendobj\n");
    }

    fn stream(&mut self, id: usize, data: &str) {
        self.begin(id);
        self.raw(&format!("<< /Length {} >>\nstream\n", data.len()));
        self.raw(data);
        self.raw("\nendstream\nendobj\n");
    }

    fn finish(mut self) -> Vec<u8> {
        let xref = self.buf.len();
        let size = self.offsets.len() + 1;
        self.raw(&format!("xref\n0 {size}\n0000000000 65535 f \n"));
        let entries: String = self
            .offsets
            .iter()
            .map(|offset| format!("{offset:010} 00000 n \n"))
            .collect();
        self.raw(&entries);
        self.raw(&format!(
            "trailer\n<< /Size {size} /Root {CATALOG} 0 R /Info {INFO} 0 R >>\nstartxref\n{xref}\n%%EOF\n"
        ));
        self.buf
    }
}
