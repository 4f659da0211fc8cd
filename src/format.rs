use crate::model::{Category, Edition, Note, NoteKind, Paper, SearchLink};

const RULE_WIDTH: usize = 70;
const SECTION_RULE_WIDTH: usize = 50;

pub struct Formatter;

impl Formatter {
    pub fn to_banner(edition: &Edition) -> String {
        format!("🔍 {}\n{}\n", edition.banner, "=".repeat(RULE_WIDTH))
    }

    pub fn to_papers_heading(title: &str) -> String {
        format!("\n📚 {}\n{}\n", title, "=".repeat(RULE_WIDTH))
    }

    pub fn to_heading(title: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!("\n{}\n📋 {}\n{}\n", rule, title, rule)
    }

    // Categories are numbered from 1 in catalog order.
    pub fn to_category_heading(index: usize, category: &Category) -> String {
        format!("\n{} {}\n{}\n",
            number_label(index + 1),
            category.label,
            "-".repeat(SECTION_RULE_WIDTH)
        )
    }

    pub fn to_paper(data: &Paper) -> String {
        let mut out = format!("📄 {}\n   Authors: {}\n   Journal: {} ({})\n   DOI: {}\n   URL: {}\n",
            data.title,
            data.authors,
            data.journal, data.year,
            data.doi,
            data.url
        );
        if let Some(status) = &data.status {
            out.push_str(&format!("   Status: {}\n", status));
        }
        out.push_str(&format!("   Description: {}\n\n", data.description));
        out
    }

    pub fn to_links_heading(title: &str) -> String {
        format!("\n🔍 {}\n{}\n", title, "-".repeat(SECTION_RULE_WIDTH))
    }

    pub fn to_link(link: &SearchLink) -> String {
        format!("🔗 {}: {}\n", link.source(), link.url())
    }

    pub fn to_summary(edition: &Edition) -> String {
        let years = match edition.year_range() {
            Some((lo, hi)) if lo == hi => lo.to_string(),
            Some((lo, hi)) => format!("{}-{}", lo, hi),
            None => String::from("n/a"),
        };
        format!("✅ Total papers provided: {}\n✅ Categories covered: {}\n✅ Years covered: {}\n",
            edition.paper_count(),
            edition.categories.len(),
            years
        )
    }

    pub fn to_note(note: &Note) -> String {
        match note.kind {
            NoteKind::Warning => format!("⚠️  {}\n", note.text),
            NoteKind::Tip => format!("💡 {}\n", note.text),
        }
    }

    pub fn to_search_terms(terms: &[String]) -> String {
        let mut out = String::from("\n🔍 RECOMMENDED SEARCH TERMS:\n");
        for term in terms {
            out.push_str(&format!("   - '{}'\n", term));
        }
        out
    }
}

// Keycap digits for 1..=9, plain numbers past that.
fn number_label(n: usize) -> String {
    match n {
        1..=9 => format!("{}\u{fe0f}\u{20e3}", n),
        _ => format!("{}.", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(status: Option<&str>) -> Paper {
        Paper {
            title: String::from("Deep Learning Models for Runway Visual Range Forecasting"),
            authors: String::from("Kumar, A., et al."),
            journal: String::from("Weather and Forecasting"),
            year: 2023,
            doi: String::from("10.1175/WAF-D-22-0123.1"),
            url: String::from("https://journals.ametsoc.org/view/journals/wefo/38/3/WAF-D-22-0123.1.xml"),
            description: String::from("Advanced ML approaches for RVR prediction"),
            status: status.map(String::from)
        }
    }

    #[test]
    fn test_paper_block() {
        let block = Formatter::to_paper(&paper(None));
        assert_eq!(block, concat!(
            "📄 Deep Learning Models for Runway Visual Range Forecasting\n",
            "   Authors: Kumar, A., et al.\n",
            "   Journal: Weather and Forecasting (2023)\n",
            "   DOI: 10.1175/WAF-D-22-0123.1\n",
            "   URL: https://journals.ametsoc.org/view/journals/wefo/38/3/WAF-D-22-0123.1.xml\n",
            "   Description: Advanced ML approaches for RVR prediction\n\n"
        ));
    }

    #[test]
    fn test_paper_block_with_status() {
        let block = Formatter::to_paper(&paper(Some("AMS Journals - Open Access")));
        assert!(block.contains("   URL: https://journals.ametsoc.org/view/journals/wefo/38/3/WAF-D-22-0123.1.xml\n   Status: AMS Journals - Open Access\n   Description:"));
    }

    #[test]
    fn test_category_numbering() {
        let category = Category { label: String::from("GEOSPATIAL VISUALIZATION"), papers: vec![] };
        assert!(Formatter::to_category_heading(3, &category).starts_with("\n4\u{fe0f}\u{20e3} GEOSPATIAL VISUALIZATION\n"));
        assert!(Formatter::to_category_heading(11, &category).starts_with("\n12. GEOSPATIAL"));
    }

    #[test]
    fn test_notes() {
        let warning = Note { kind: NoteKind::Warning, text: String::from("Subscription required") };
        let tip = Note { kind: NoteKind::Tip, text: String::from("Check arXiv") };
        assert_eq!(Formatter::to_note(&warning), "⚠️  Subscription required\n");
        assert_eq!(Formatter::to_note(&tip), "💡 Check arXiv\n");
    }
}
