//! Terminal output formatting for view snapshots
//!
//! Rendering produces strings so the layouts can be tested; the `print_*`
//! helpers write them to stdout. Colours are used only on a TTY, without
//! `--plain`, and when `NO_COLOR` is unset.

use crossterm::tty::IsTty;
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io;

use crate::registry::PokemonType;
use crate::views::{DetailPage, EntrySummary, GalleryPage, ListPage};

/// Output formatter configuration
pub struct OutputFormatter {
    /// Whether to use colors and formatting
    pub use_colors: bool,
}

impl OutputFormatter {
    /// Create a new formatter with automatic TTY detection
    pub fn new(plain: bool) -> Self {
        let is_tty = io::stdout().is_tty();
        let no_color = std::env::var("NO_COLOR").is_ok();

        Self {
            use_colors: !plain && !no_color && is_tty,
        }
    }

    pub fn print_list(&self, page: &ListPage) {
        print!("{}", self.render_list(page));
    }

    pub fn print_gallery(&self, page: &GalleryPage) {
        print!("{}", self.render_gallery(page));
    }

    pub fn print_detail(&self, page: &DetailPage) {
        print!("{}", self.render_detail(page));
    }

    pub fn print_types(&self) {
        print!("{}", self.render_types());
    }

    /// Master-detail list: header, one line per match, selected artwork
    pub fn render_list(&self, page: &ListPage) -> String {
        let mut out = String::new();
        let header = format!("{} out of {}", page.matched, page.total);
        let _ = writeln!(out, "{}  {}", self.bold(&header), self.dim(&format!("sort: {}", page.sort_mode)));

        if page.entries.is_empty() {
            let _ = writeln!(out, "No entries found.");
        }

        for (idx, entry) in page.entries.iter().enumerate() {
            let is_last = idx == page.entries.len() - 1;
            let selected = entry.id == page.selected_id;
            let _ = writeln!(out, "{}", self.entry_line(entry, is_last, selected));
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} #{} {}",
            self.dim("selected"),
            page.selected_id,
            self.dim(&page.selected_artwork_url)
        );
        out
    }

    /// One grid page with its page indicator
    pub fn render_gallery(&self, page: &GalleryPage) -> String {
        let mut out = String::new();

        let mut header = format!("{} matches", page.matched);
        if !page.selected_types.is_empty() {
            let types: Vec<String> = page.selected_types.iter().map(|t| t.to_string()).collect();
            let _ = write!(header, " [types: {}]", types.join(", "));
        }
        let _ = writeln!(out, "{}  {}", self.bold(&header), self.dim(&format!("sort: {}", page.sort_mode)));

        if page.entries.is_empty() {
            let _ = writeln!(out, "No entries found.");
            return out;
        }

        for (idx, entry) in page.entries.iter().enumerate() {
            let is_last = idx == page.entries.len() - 1;
            let _ = writeln!(out, "{}", self.entry_line(entry, is_last, false));
        }

        if page.page_count > 1 {
            let prev = if page.can_retreat { "<" } else { " " };
            let next = if page.can_advance { ">" } else { " " };
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{} page {}/{} {}",
                prev,
                page.page + 1,
                page.page_count,
                next
            );
        }
        out
    }

    /// Detail card: stats, types, artwork links, prev/next ids
    pub fn render_detail(&self, page: &DetailPage) -> String {
        let mut out = String::new();
        let title = format!("#{}  {}", page.id, page.name.to_uppercase());
        let _ = writeln!(out, "{}", self.bold(&title));
        let _ = writeln!(out);

        for stat in &page.stats {
            let _ = writeln!(out, "  {:<16} {}", stat.name.to_uppercase(), stat.value);
        }

        let base_exp = page
            .base_experience
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  Base EXP: {}    Weight: {}", base_exp, page.weight);
        let _ = writeln!(out);

        let badges: Vec<String> = page.types.iter().map(|t| self.type_badge_name(t)).collect();
        let _ = writeln!(out, "  Type(s): {}", badges.join(" "));
        let _ = writeln!(out, "  Artwork: {}", self.dim(&page.artwork_url));
        let _ = writeln!(out, "  Shiny:   {}", self.dim(&page.shiny_url));
        let _ = writeln!(out);
        let _ = writeln!(out, "< #{}    #{} >", page.prev_id, page.next_id);
        out
    }

    /// The category registry
    pub fn render_types(&self) -> String {
        let mut out = String::new();
        for kind in PokemonType::all() {
            let _ = writeln!(out, "{:>3}  {}", kind.id(), self.type_badge(kind));
        }
        out
    }

    fn entry_line(&self, entry: &EntrySummary, is_last: bool, selected: bool) -> String {
        let connector = if is_last { "└─" } else { "├─" };
        let label = format!("{:>5}", entry.label);
        let badges: Vec<String> = entry.types.iter().map(|t| self.type_badge(*t)).collect();
        let marker = if selected { "*" } else { " " };

        let mut line = if self.use_colors {
            format!(
                "{}{} {} {}",
                marker,
                connector.dimmed(),
                label.yellow(),
                entry.name.bold()
            )
        } else {
            format!("{}{} {} {}", marker, connector, label, entry.name)
        };

        if !badges.is_empty() {
            line.push(' ');
            line.push_str(&badges.join(" "));
        }
        line
    }

    fn type_badge_name(&self, name: &str) -> String {
        match PokemonType::from_name(name) {
            Some(kind) => self.type_badge(kind),
            None => format!("[{}]", name),
        }
    }

    fn type_badge(&self, kind: PokemonType) -> String {
        let text = format!("[{}]", kind);
        if !self.use_colors {
            return text;
        }

        match kind {
            PokemonType::Fire => text.red().to_string(),
            PokemonType::Water | PokemonType::Ice => text.blue().to_string(),
            PokemonType::Grass | PokemonType::Bug => text.green().to_string(),
            PokemonType::Electric | PokemonType::Ground => text.yellow().to_string(),
            PokemonType::Psychic | PokemonType::Fairy => text.magenta().to_string(),
            PokemonType::Poison | PokemonType::Ghost | PokemonType::Dragon => {
                text.bright_magenta().to_string()
            }
            PokemonType::Flying | PokemonType::Steel => text.cyan().to_string(),
            PokemonType::Dark | PokemonType::Rock | PokemonType::Fighting => {
                text.bright_red().to_string()
            }
            PokemonType::Normal => text.white().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
