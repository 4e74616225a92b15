//! # Page Layout
//!
//! Flows a sequence of [`Block`]s onto A4 pages with 3 cm margins and
//! produces positioned drawing operations per page.
//!
//! ## Table of contents
//!
//! Headings register a [`TocEntry`] with the page they land on. The TOC
//! block itself takes room before the sections it lists, so the page
//! numbers it prints depend on its own length. [`paginate`] therefore lays
//! the document out repeatedly, feeding each pass the entries found by the
//! previous one, until two consecutive passes agree.
//!
//! ## Page furniture
//!
//! Page 1 is the cover. Every later page gets a header (generation date and
//! branding mark) and a footer (organization name and page number), drawn
//! in the 2 cm band outside the content frame.

use crate::font::Font;

/// Points per centimetre.
pub const CM: f64 = 72.0 / 2.54;
pub const PAGE_WIDTH: f64 = 595.2756;
pub const PAGE_HEIGHT: f64 = 841.8898;

const MARGIN: f64 = 3.0 * CM;
const FRAME_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
const FRAME_TOP: f64 = PAGE_HEIGHT - MARGIN;
const FRAME_BOTTOM: f64 = MARGIN;

const FURNITURE_MARGIN: f64 = 2.0 * CM;
const FURNITURE_SEP: f64 = 0.2 * CM;

const LABEL_WIDTH: f64 = 3.0 * CM;
const VALUE_WIDTH: f64 = 12.0 * CM;
const CELL_PAD_X: f64 = 6.0;
const CELL_PAD_Y: f64 = 3.0;

const BODY_SIZE: f64 = 8.0;
const BODY_LEADING: f64 = 10.0;
const HEADING_SPACE_BEFORE: f64 = 10.0;
const TITLE_SIZE: f64 = 16.0;

const MAX_PASSES: usize = 6;

// ─── Input ───────────────────────────────────────────────────────────

/// A unit of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Centered document title.
    Title(String),
    /// Numbered section heading. `toc_text` is what the TOC lists.
    Heading {
        level: usize,
        number: String,
        text: String,
        toc_text: String,
    },
    /// Two-column label/value table.
    Table(Vec<(String, String)>),
    Paragraph { text: String, italic: bool },
    /// Unnumbered sub-section title that stays out of the TOC.
    Caption(String),
    /// Where the table of contents is drawn.
    Toc,
    PageBreak,
}

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: usize,
    pub number: String,
    pub text: String,
    /// 1-based page number, counting the cover.
    pub page: usize,
}

impl TocEntry {
    pub fn label(&self) -> String {
        format!("{} {}", self.number, self.text)
    }
}

/// Text drawn around the content frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorations {
    /// Cover page title.
    pub title: String,
    /// Branding mark shown on the cover and in every header.
    pub branding: String,
    /// Organization named in every footer.
    pub organization: String,
    /// Already formatted generation date.
    pub generated_on: String,
}

// ─── Output ──────────────────────────────────────────────────────────

/// A positioned drawing operation, in PDF user space (origin bottom left).
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Text {
        x: f64,
        y: f64,
        font: Font,
        size: f64,
        text: String,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<Op>,
}

impl Page {
    /// All text drawn on the page, one operation per line.
    pub fn text(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn text_at(&mut self, x: f64, y: f64, font: Font, size: f64, text: impl Into<String>) {
        self.ops.push(Op::Text {
            x,
            y,
            font,
            size,
            text: text.into(),
        });
    }

    fn text_right(&mut self, right: f64, y: f64, font: Font, size: f64, text: &str) {
        let x = right - font.width(text, size);
        self.text_at(x, y, font, size, text);
    }

    fn text_centered(&mut self, y: f64, font: Font, size: f64, text: &str) {
        let x = (PAGE_WIDTH - font.width(text, size)) / 2.0;
        self.text_at(x, y, font, size, text);
    }
}

/// A laid out document.
#[derive(Debug, Clone)]
pub struct Layout {
    pub pages: Vec<Page>,
    pub toc: Vec<TocEntry>,
    /// Number of layout passes it took for the TOC to settle.
    pub passes: usize,
}

/// Lay `blocks` out, repeating until the table of contents is stable.
pub fn paginate(blocks: &[Block], decor: &Decorations) -> Layout {
    let mut toc = Vec::new();
    let mut pass = 1;
    loop {
        let (mut pages, found) = flow(blocks, &toc, decor);
        let settled = found == toc;
        if settled || pass == MAX_PASSES {
            if !settled {
                tracing::warn!(passes = pass, "table of contents did not settle");
            }
            decorate(&mut pages, decor);
            return Layout {
                pages,
                toc: found,
                passes: pass,
            };
        }
        toc = found;
        pass += 1;
    }
}

// ─── Text wrapping ───────────────────────────────────────────────────

/// Break `text` into lines no wider than `width`. Explicit newlines are
/// kept; words longer than a line are split between characters. Always
/// returns at least one line.
pub fn wrap(text: &str, font: Font, size: f64, width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if font.width(&candidate, size) <= width {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if font.width(word, size) <= width {
                line = word.to_string();
                continue;
            }
            for c in word.chars() {
                line.push(c);
                if line.chars().count() > 1 && font.width(&line, size) > width {
                    line.pop();
                    lines.push(std::mem::replace(&mut line, c.to_string()));
                }
            }
        }
        lines.push(line);
    }
    lines
}

// ─── Flow ────────────────────────────────────────────────────────────

struct Flow<'a> {
    done: Vec<Page>,
    current: Page,
    y: f64,
    toc_in: &'a [TocEntry],
    toc_out: Vec<TocEntry>,
}

fn flow(blocks: &[Block], toc: &[TocEntry], decor: &Decorations) -> (Vec<Page>, Vec<TocEntry>) {
    let mut f = Flow {
        done: vec![cover_page(decor)],
        current: Page::default(),
        y: FRAME_TOP,
        toc_in: toc,
        toc_out: Vec::new(),
    };
    for block in blocks {
        match block {
            Block::Title(text) => f.title(text),
            Block::Heading {
                level,
                number,
                text,
                toc_text,
            } => f.heading(*level, number, text, toc_text),
            Block::Table(rows) => f.table(rows),
            Block::Paragraph { text, italic } => f.paragraph(text, *italic),
            Block::Caption(text) => f.caption(text),
            Block::Toc => f.toc(),
            Block::PageBreak => {
                if !f.at_top() {
                    f.new_page();
                }
            }
        }
    }
    let Flow {
        mut done,
        current,
        toc_out,
        ..
    } = f;
    done.push(current);
    (done, toc_out)
}

impl Flow<'_> {
    fn page_number(&self) -> usize {
        self.done.len() + 1
    }

    fn at_top(&self) -> bool {
        self.y >= FRAME_TOP
    }

    fn remaining(&self) -> f64 {
        self.y - FRAME_BOTTOM
    }

    fn new_page(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
        self.y = FRAME_TOP;
    }

    /// Start a new page unless `height` still fits on this one.
    fn ensure(&mut self, height: f64) {
        if height > self.remaining() && !self.at_top() {
            self.new_page();
        }
    }

    /// Draw one line at the left edge plus `indent` and advance.
    fn line(&mut self, indent: f64, font: Font, size: f64, leading: f64, text: &str) {
        self.ensure(leading);
        let baseline = self.y - size;
        self.current
            .text_at(MARGIN + indent, baseline, font, size, text);
        self.y -= leading;
    }

    fn title(&mut self, text: &str) {
        for line in wrap(text, Font::Regular, TITLE_SIZE, FRAME_WIDTH) {
            self.ensure(TITLE_SIZE + 4.0);
            let baseline = self.y - TITLE_SIZE;
            self.current
                .text_centered(baseline, Font::Regular, TITLE_SIZE, &line);
            self.y -= TITLE_SIZE + 4.0;
        }
        self.y -= 20.0;
    }

    fn heading(&mut self, level: usize, number: &str, text: &str, toc_text: &str) {
        let step = level.clamp(1, 5) as f64 - 1.0;
        let size = 12.0 - step;
        let leading = size + 2.0;
        let space_after = 15.0 - step;

        let lines = wrap(&format!("{number} {text}"), Font::Bold, size, FRAME_WIDTH);
        // Keep the heading together with the first lines of what follows.
        let needed = lines.len() as f64 * leading + 3.0 * BODY_LEADING;
        if !self.at_top() {
            if HEADING_SPACE_BEFORE + needed > self.remaining() {
                self.new_page();
            } else {
                self.y -= HEADING_SPACE_BEFORE;
            }
        }
        self.toc_out.push(TocEntry {
            level,
            number: number.to_string(),
            text: toc_text.to_string(),
            page: self.page_number(),
        });
        for line in &lines {
            self.line(0.0, Font::Bold, size, leading, line);
        }
        self.y -= space_after - (leading - size);
    }

    fn caption(&mut self, text: &str) {
        let needed = BODY_LEADING * 3.0 + 2.0 * CELL_PAD_Y;
        if !self.at_top() {
            if 6.0 + needed > self.remaining() {
                self.new_page();
            } else {
                self.y -= 6.0;
            }
        }
        for line in wrap(text, Font::Bold, BODY_SIZE, FRAME_WIDTH) {
            self.line(0.0, Font::Bold, BODY_SIZE, BODY_LEADING, &line);
        }
        self.y -= 4.0;
    }

    fn paragraph(&mut self, text: &str, italic: bool) {
        let font = if italic { Font::Oblique } else { Font::Regular };
        for line in wrap(text, font, BODY_SIZE, FRAME_WIDTH) {
            self.line(0.0, font, BODY_SIZE, BODY_LEADING, &line);
        }
        self.y -= 4.0;
    }

    fn table(&mut self, rows: &[(String, String)]) {
        for (label, value) in rows {
            self.row(label, value);
        }
        self.y -= 6.0;
    }

    fn lines_that_fit(&self) -> usize {
        let room = (self.y - FRAME_BOTTOM - 2.0 * CELL_PAD_Y) / BODY_LEADING;
        room.max(0.0).floor() as usize
    }

    /// One table row. A row taller than the room left moves to the next
    /// page; a row taller than a whole page is split across pages.
    fn row(&mut self, label: &str, value: &str) {
        let labels = wrap(label, Font::Regular, BODY_SIZE, LABEL_WIDTH - 2.0 * CELL_PAD_X);
        let values = wrap(value, Font::Oblique, BODY_SIZE, VALUE_WIDTH - 2.0 * CELL_PAD_X);
        let total = labels.len().max(values.len());
        let per_page = ((FRAME_TOP - FRAME_BOTTOM - 2.0 * CELL_PAD_Y) / BODY_LEADING).floor() as usize;

        let mut start = 0;
        while start < total {
            let needed = total - start;
            let mut fit = self.lines_that_fit();
            if fit < needed && !self.at_top() && (fit == 0 || needed <= per_page) {
                self.new_page();
                fit = self.lines_that_fit();
            }
            let take = needed.min(fit.max(1));
            let top = self.y;
            let height = take as f64 * BODY_LEADING + 2.0 * CELL_PAD_Y;
            for i in 0..take {
                let baseline = top - CELL_PAD_Y - BODY_SIZE - 1.0 - i as f64 * BODY_LEADING;
                if let Some(text) = labels.get(start + i) {
                    self.current.text_right(
                        MARGIN + LABEL_WIDTH - CELL_PAD_X,
                        baseline,
                        Font::Regular,
                        BODY_SIZE,
                        text,
                    );
                }
                if let Some(text) = values.get(start + i) {
                    self.current.text_at(
                        MARGIN + LABEL_WIDTH + CELL_PAD_X,
                        baseline,
                        Font::Oblique,
                        BODY_SIZE,
                        text.as_str(),
                    );
                }
            }
            self.current.ops.push(Op::Rect {
                x: MARGIN + LABEL_WIDTH,
                y: top - height,
                width: VALUE_WIDTH,
                height,
            });
            self.y -= height;
            start += take;
            if start < total {
                self.new_page();
            }
        }
    }

    fn toc(&mut self) {
        let entries = self.toc_in;
        for entry in entries {
            let step = entry.level.clamp(1, 5) - 1;
            let size = 12.0 - step as f64;
            let leading = size + 3.0;
            let indent = 10.0 * step as f64;
            let page = entry.page.to_string();
            let page_width = Font::Regular.width(&page, size);
            let room = FRAME_WIDTH - indent - page_width - 12.0;

            let lines = wrap(&entry.label(), Font::Regular, size, room);
            let last = lines.len().saturating_sub(1);
            for (i, line) in lines.iter().enumerate() {
                self.line(indent, Font::Regular, size, leading, line);
                if i != last {
                    continue;
                }
                let baseline = self.y + leading - size;
                let right = MARGIN + FRAME_WIDTH;
                let dots_from = MARGIN + indent + Font::Regular.width(line, size) + 4.0;
                let dots_to = right - page_width - 4.0;
                let dot = Font::Regular.width(".", size);
                let count = ((dots_to - dots_from) / dot).max(0.0).floor() as usize;
                if count > 0 {
                    self.current
                        .text_at(dots_from, baseline, Font::Regular, size, ".".repeat(count));
                }
                self.current
                    .text_right(right, baseline, Font::Regular, size, &page);
            }
        }
    }
}

// ─── Page furniture ──────────────────────────────────────────────────

fn cover_page(decor: &Decorations) -> Page {
    let mut page = Page::default();
    let mark_size = 28.0;
    let mark_y = PAGE_HEIGHT / 2.0 + 2.0 * CM;
    let mark_width = Font::Bold.width(&decor.branding, mark_size);
    page.text_centered(mark_y, Font::Bold, mark_size, &decor.branding);
    page.ops.push(Op::Rect {
        x: (PAGE_WIDTH - mark_width) / 2.0 - 12.0,
        y: mark_y - 12.0,
        width: mark_width + 24.0,
        height: mark_size + 20.0,
    });
    page.text_centered(PAGE_HEIGHT / 2.0 - 2.0 * CM, Font::Bold, TITLE_SIZE, &decor.title);
    page
}

fn decorate(pages: &mut [Page], decor: &Decorations) {
    let left = FURNITURE_MARGIN;
    let right = PAGE_WIDTH - FURNITURE_MARGIN;
    let header_line = PAGE_HEIGHT - FURNITURE_MARGIN + FURNITURE_SEP;
    let footer_line = FURNITURE_MARGIN - FURNITURE_SEP;
    let generated = format!("Report generated on {}", decor.generated_on);
    let footer = format!(
        "GDPR Registry of Data Processing Activities for {}",
        decor.organization
    );

    for (index, page) in pages.iter_mut().enumerate().skip(1) {
        let header_y = header_line + FURNITURE_SEP;
        page.ops.push(Op::Line {
            from: (left, header_line),
            to: (right, header_line),
            width: 3.0,
        });
        page.text_at(left, header_y, Font::Regular, BODY_SIZE, generated.as_str());
        page.text_right(right, header_y, Font::Bold, BODY_SIZE, &decor.branding);
        let mark = Font::Bold.width(&decor.branding, BODY_SIZE);
        page.text_right(right - mark - 3.0, header_y, Font::Regular, BODY_SIZE, "Powered by");

        let footer_y = footer_line - FURNITURE_SEP - BODY_SIZE;
        page.ops.push(Op::Line {
            from: (left, footer_line),
            to: (right, footer_line),
            width: 3.0,
        });
        page.text_at(left, footer_y, Font::Regular, BODY_SIZE, footer.as_str());
        page.text_right(
            right,
            footer_y,
            Font::Regular,
            BODY_SIZE,
            &format!("Page {}", index + 1),
        );
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_wrapped_lines_fit_and_keep_words(
            text in "[a-zA-Z ]{0,300}",
            width in 10.0f64..300.0,
        ) {
            let lines = wrap(&text, Font::Regular, 8.0, width);
            for line in &lines {
                prop_assert!(
                    line.chars().count() <= 1 || Font::Regular.width(line, 8.0) <= width,
                    "line {line:?} overflows {width}"
                );
            }
            let kept: String = lines.concat().chars().filter(|c| !c.is_whitespace()).collect();
            let original: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(kept, original);
        }
    }
}
