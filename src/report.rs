use quadsieve::{FilterState, GenerationResult, IngestReport, ModeSwitch, QueryResult, digits_to_string};

/// Roles a piece of report text can play, each with its ANSI style.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Rule,
    Label,
    Count,
    Total,
    Warn,
    Name,
    Strong,
    Faint,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Rule => "90",
            Tone::Label => "34",
            Tone::Count => "32",
            Tone::Total => "1;32",
            Tone::Warn => "33",
            Tone::Name => "36",
            Tone::Strong => "1",
            Tone::Faint => "2",
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: impl AsRef<str>, tone: Tone) -> String {
        let text = text.as_ref();
        if self.enabled { format!("\x1b[{}m{text}\x1b[0m", tone.sgr()) } else { text.to_string() }
    }

    fn heading(&self, title: &str) -> String {
        self.paint(format!("━━━ {title} ━━━"), Tone::Rule)
    }

    fn summary(&self, label: &str, value: usize) -> String {
        format!("  {} {}", self.paint(label, Tone::Label), self.paint(value.to_string(), Tone::Total))
    }
}

pub fn print_import(files: &[(String, IngestReport)], color: bool) {
    let palette = Palette::new(color);
    for (name, report) in files {
        println!("\n{}", palette.heading(name));
        if report.records.is_empty() {
            println!("{}", palette.paint("  No draws found", Tone::Faint));
        }
        for row in report.rows() {
            println!("  {row}");
        }
        let skipped_tone = if report.skipped > 0 { Tone::Warn } else { Tone::Rule };
        println!(
            "  {} {}  {} {}",
            palette.paint("accepted", Tone::Label),
            palette.paint(report.accepted().to_string(), Tone::Count),
            palette.paint("│ skipped", Tone::Faint),
            palette.paint(report.skipped.to_string(), skipped_tone),
        );
    }
    println!();
}

pub fn print_saved(key: &str, rows: usize, color: bool) {
    let palette = Palette::new(color);
    println!(
        "{} {} {}",
        palette.paint("saved", Tone::Count),
        palette.paint(key, Tone::Strong),
        palette.paint(format!("({rows} rows)"), Tone::Faint)
    );
}

pub fn print_keys(keys: &[String], color: bool) {
    let palette = Palette::new(color);
    if keys.is_empty() {
        println!("{}", palette.paint("no archives", Tone::Faint));
    }
    for key in keys {
        println!("{}", palette.paint(key, Tone::Name));
    }
}

pub fn print_filters(filters: &FilterState, color: bool) {
    let palette = Palette::new(color);
    let names = filters.active_names();
    if names.is_empty() {
        return;
    }
    let list = names.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    println!(
        "{} {}  {} {}  {} {}",
        palette.paint("filters:", Tone::Faint),
        palette.paint(list, Tone::Name),
        palette.paint("│ repeat:", Tone::Faint),
        filters.mode(ModeSwitch::Repeat),
        palette.paint("│ adjacency:", Tone::Faint),
        filters.mode(ModeSwitch::Adjacency),
    );
}

pub fn print_query(result: &QueryResult, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.heading("Matches"));
    if result.matches.is_empty() {
        println!("{}", palette.paint("  No matching draws", Tone::Faint));
    }
    for row in &result.matches {
        println!("  {row}");
    }
    println!("\n{}\n", palette.summary("count", result.count));
}

pub fn print_generation(result: &GenerationResult, limit: usize, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.heading("Combinations"));
    if result.total == 0 {
        println!("{}", palette.paint("  No combinations satisfy the current filters", Tone::Faint));
    }
    for (digits, sum) in result.shown(limit) {
        let sum = palette.paint(format!("sum {sum}"), Tone::Faint);
        println!("  {}  {sum}", palette.paint(digits_to_string(digits), Tone::Strong));
    }
    if result.is_truncated(limit) {
        println!("  {}", palette.paint(format!("... showing {limit} of {}", result.total), Tone::Warn));
    }
    println!("\n{}\n", palette.summary("total", result.total));
}
