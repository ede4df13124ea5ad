use scraper::ElementRef;

/// Collect and trim the visible text of an element.
pub fn cell_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parse a vote count or voter statistic. The site groups digits with
/// non-breaking or plain spaces ("1 234"), so both are stripped first.
pub fn parse_count(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '\u{a0}' && *c != ' ')
        .collect();
    digits.parse().ok()
}
