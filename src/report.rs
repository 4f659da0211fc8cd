use std::io::{self, Write};

use crate::{
    format::Formatter,
    model::Edition
};

// Writes a full edition listing.
pub struct Report;

impl Report {
    pub fn write_edition<W: Write>(out: &mut W, edition: &Edition) -> io::Result<()> {
        out.write_all(Formatter::to_banner(edition).as_bytes())?;
        out.write_all(Formatter::to_papers_heading(&edition.heading).as_bytes())?;

        edition.categories.iter().enumerate().try_for_each(|(i, category)| -> io::Result<()> {
            out.write_all(Formatter::to_category_heading(i, category).as_bytes())?;
            category.papers.iter().try_for_each(|paper| {
                out.write_all(Formatter::to_paper(paper).as_bytes())
            })
        })?;

        out.write_all(Formatter::to_links_heading(&edition.links_heading).as_bytes())?;
        edition.links.iter().try_for_each(|link| {
            out.write_all(Formatter::to_link(link).as_bytes())
        })?;

        out.write_all(Formatter::to_heading(&edition.notes_heading).as_bytes())?;
        if edition.summary {
            out.write_all(Formatter::to_summary(edition).as_bytes())?;
            out.write_all(b"\n")?;
        }
        edition.notes.iter().try_for_each(|note| {
            out.write_all(Formatter::to_note(note).as_bytes())
        })?;
        if edition.list_terms && !edition.search_terms.is_empty() {
            out.write_all(Formatter::to_search_terms(&edition.search_terms).as_bytes())?;
        }
        out.flush()
    }

    pub fn render(edition: &Edition) -> io::Result<String> {
        let mut buf = Vec::new();
        Self::write_edition(&mut buf, edition)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
