//! Terminal presentation: the room screen, cues and endings.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;
use comfy_table::{
    Cell, CellAlignment, ColumnConstraint, ContentArrangement, Table, Width, presets,
};
use colony_core::{Actor, ColonyClock, GameConfig, Quest};
use colony_fiction::narrative;
use colony_fiction::{AnimationKind, AnimationStep, ColonySession, Cue, Ending};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use crate::map;

/// Width of the room panel.
const MAIN_WIDTH: usize = 70;
/// Width of the stats panel.
const STATS_WIDTH: usize = 28;
/// Width of the stats table's single column, borders excluded.
const STATS_COLUMN: u16 = 26;
/// Content width of the appreciation box.
const BOX_WIDTH: usize = 52;
const SCANNING: &str = "Scanning location...";
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
const FIREWORKS: [(&str, &str); 4] = [
    ("      .      ", "     ,O,     "),
    ("      *      ", "   \\ `O` /   "),
    ("    \\ | /    ", "   -- * --   "),
    ("    . | .    ", "   .  *  .   "),
];

/// How a line of the room panel is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Heading,
    Section,
    Action,
    Message,
}

/// Draws everything the player sees.
pub struct Screen {
    fast: bool,
    width: usize,
    bonus_per_unit: u32,
}

type Res = Result<(), String>;

fn io_err(e: io::Error) -> String {
    format!("terminal error: {e}")
}

impl Screen {
    /// `fast` skips every sleep and every "press enter" pause.
    pub fn new(fast: bool, config: &GameConfig) -> Self {
        let width = terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(MAIN_WIDTH + STATS_WIDTH + 2);
        Self {
            fast,
            width,
            bonus_per_unit: config.minshin_per_ambrosium_post_quota,
        }
    }

    fn pause(&self, seconds: f64) {
        if !self.fast && seconds > 0.0 {
            thread::sleep(Duration::from_secs_f64(seconds));
        }
    }

    fn clear(&self) -> Res {
        let mut out = io::stdout();
        execute!(out, Clear(ClearType::All), MoveTo(0, 0)).map_err(io_err)
    }

    fn center(&self, text: &str) -> String {
        format!("{text:^width$}", width = self.width)
    }

    fn wait_for_enter(&self, prompt: &str) -> Res {
        if self.fast {
            return Ok(());
        }
        print!("\n{}", self.center(prompt));
        io::stdout().flush().map_err(io_err)?;
        let mut line = String::new();
        io::stdin().read_line(&mut line).map_err(io_err)?;
        Ok(())
    }

    /// Print `text` one character at a time.
    fn type_out(&self, text: &str, char_delay: f64) -> Res {
        if self.fast || char_delay <= 0.0 {
            print!("{text}");
            return io::stdout().flush().map_err(io_err);
        }
        let mut out = io::stdout();
        for c in text.chars() {
            write!(out, "{c}").map_err(io_err)?;
            out.flush().map_err(io_err)?;
            self.pause(char_delay);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Intro
    // -----------------------------------------------------------------------

    /// The typed-out personnel briefing.
    pub fn intro(&self, config: &GameConfig) -> Res {
        self.clear()?;
        let notice = narrative::intro_quota_notice(config.ambrosium_quota, config.quota_period_days);
        let lines = narrative::INTRO
            .iter()
            .map(|(text, delay, pause)| ((*text).to_string(), *delay, *pause))
            .chain(notice.into_iter().map(|text| (text, 0.02, 1.0)));

        for (text, delay, pause) in lines {
            for line in wrap(&text, self.width) {
                let boxed = line.starts_with(['+', '|', '*']);
                if boxed {
                    print!("{}", " ".repeat(self.width.saturating_sub(line.len()) / 2));
                }
                self.type_out(&line, delay)?;
                println!();
            }
            if text.is_empty() {
                println!();
            }
            self.pause(pause);
        }

        self.type_out("Enter anything to continue...", 0.05)?;
        if !self.fast {
            let mut line = String::new();
            io::stdin().read_line(&mut line).map_err(io_err)?;
        }
        println!();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Room screen
    // -----------------------------------------------------------------------

    /// Redraw the current location with its menu, queued messages and stats.
    pub fn room(&self, session: &mut ColonySession) -> Res {
        let location = session.location().map_err(|e| e.to_string())?;
        let description = location.description();
        let actions = location.available_actions().to_vec();
        let messages = session.drain_messages();
        let stats = stats_box(session.actor(), session.clock());

        let mut panel: Vec<(String, Tone)> = Vec::new();
        for (idx, line) in wrap(&description, MAIN_WIDTH).into_iter().enumerate() {
            let tone = if idx == 0 { Tone::Heading } else { Tone::Plain };
            panel.push((line, tone));
        }
        if !actions.is_empty() {
            panel.push((String::new(), Tone::Plain));
            panel.push(("Available actions:".to_string(), Tone::Section));
            for (n, action) in actions.iter().enumerate() {
                panel.push((format!("{}. {action}", n + 1), Tone::Action));
            }
        }
        if !messages.is_empty() {
            panel.push((String::new(), Tone::Plain));
            panel.push(("Messages:".to_string(), Tone::Section));
            for message in &messages {
                for line in wrap(message, MAIN_WIDTH) {
                    panel.push((line, Tone::Message));
                }
            }
        }

        self.clear()?;
        let rule = "=".repeat(MAIN_WIDTH + STATS_WIDTH + 2);
        println!("{rule}");
        for row in 0..panel.len().max(stats.len()) {
            let (text, tone) = panel
                .get(row)
                .map(|(text, tone)| (text.as_str(), *tone))
                .unwrap_or(("", Tone::Plain));
            let padded = format!("{text:<MAIN_WIDTH$}");
            let stats_line = stats.get(row).map(String::as_str).unwrap_or("");
            println!("{}  {}", paint(&padded, tone), stats_line.cyan());
        }
        println!("\n{rule}");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Cues
    // -----------------------------------------------------------------------

    /// Play one presentation cue.
    pub fn cue(&self, cue: &Cue) -> Res {
        match cue {
            Cue::ShowMap { location } => self.map(location),
            Cue::Animation { kind, steps } => self.animation(*kind, steps),
            Cue::Mining { seconds } => self.mining(*seconds),
            Cue::Appreciation { npc, message } => self.appreciation(npc, message),
            Cue::QuotaCelebration => self.celebration(),
            Cue::Discovery { heading, subject } => self.discovery(heading, subject),
        }
    }

    fn spinner(&self, text: &str, padding: usize, seconds: f64) -> Res {
        let mut out = io::stdout();
        if !self.fast {
            let start = Instant::now();
            let mut frame = 0;
            while start.elapsed().as_secs_f64() < seconds {
                write!(out, "\r{text:<padding$} [{}]", SPINNER[frame % SPINNER.len()])
                    .map_err(io_err)?;
                out.flush().map_err(io_err)?;
                self.pause(0.1);
                frame += 1;
            }
        }
        writeln!(out, "\r{text:<padding$} [{}]", "✓".green()).map_err(io_err)
    }

    fn animation(&self, kind: AnimationKind, steps: &[AnimationStep]) -> Res {
        let padding = match kind {
            AnimationKind::Travel => {
                self.clear()?;
                50
            }
            AnimationKind::Terminal | AnimationKind::Deposit => 70,
        };
        println!();
        for step in steps {
            self.spinner(&step.text, padding, step.seconds)?;
            self.pause(0.5);
        }
        match kind {
            AnimationKind::Travel => self.pause(1.0),
            AnimationKind::Deposit => {
                println!("Thank you for your service - Olympus Resources");
                println!("{}", "-".repeat(30));
                self.pause(1.0);
            }
            AnimationKind::Terminal => {}
        }
        Ok(())
    }

    fn mining(&self, seconds: f64) -> Res {
        self.spinner("Mining...", 0, seconds)
    }

    fn fireworks(&self) -> Res {
        if self.fast {
            return Ok(());
        }
        let start = Instant::now();
        let mut frame = 0;
        while start.elapsed().as_secs() < 3 {
            self.clear()?;
            let (top, bottom) = FIREWORKS[frame % FIREWORKS.len()];
            print!("{}", "\n".repeat(6));
            println!("{}", self.center(top).yellow());
            println!("{}", self.center(bottom).red());
            self.pause(0.2);
            frame += 1;
        }
        self.clear()
    }

    fn appreciation(&self, npc: &str, message: &str) -> Res {
        self.fireworks()?;
        let border = format!("+{}+", "=".repeat(BOX_WIDTH));
        let blank = format!("|{}|", " ".repeat(BOX_WIDTH));
        let lines = [
            border.clone(),
            blank.clone(),
            format!("|{:^BOX_WIDTH$}|", "You gained appreciation from:"),
            format!("|{npc:^BOX_WIDTH$}|"),
            blank,
            border,
        ];

        println!("\n\n");
        for line in &lines {
            println!("{}", self.center(line).bold());
        }
        println!();
        for line in wrap(message, self.width.saturating_sub(4)) {
            println!("{}", self.center(&line));
        }
        self.pause(2.0);
        self.wait_for_enter("Press Enter to continue...")
    }

    fn celebration(&self) -> Res {
        self.fireworks()?;
        let banner = [
            "|----------------------------------------------------|",
            "|                                                    |",
            "|               QUOTA OBLIGATION FULFILLED           |",
            "|                                                    |",
            "|----------------------------------------------------|",
        ];
        println!("\n\n");
        for line in banner {
            println!("{}", self.center(line).green().bold());
        }
        println!();
        let text = [
            "Congratulations Miner, your quota for this cycle has been met. Your service to \
             Olympus Resources is noted and appreciated."
                .to_string(),
            format!(
                "As a reward, any further Ambrosium deposited this cycle will yield a bonus of \
                 {} Minshin per crystal.",
                self.bonus_per_unit
            ),
            "You may continue to contribute to the company's prosperity until the next cycle."
                .to_string(),
        ];
        for paragraph in &text {
            for line in wrap(paragraph, self.width.saturating_sub(4)) {
                println!("{}", self.center(&line));
            }
        }
        self.wait_for_enter("Press Enter to continue...")
    }

    fn discovery(&self, heading: &str, subject: &str) -> Res {
        self.clear()?;
        let height = terminal::size().map(|(_, rows)| usize::from(rows)).unwrap_or(24);
        print!("{}", "\n".repeat((height / 2).saturating_sub(1)));
        for line in [heading, subject] {
            print!("{}", " ".repeat(self.width.saturating_sub(line.len()) / 2));
            self.type_out(line, 0.1)?;
            println!();
        }
        self.pause(4.0);
        Ok(())
    }

    fn map(&self, location: &str) -> Res {
        let Some(final_map) = map::render(location, ">>> YOU ARE HERE <<<") else {
            self.clear()?;
            for line in map::plain() {
                println!("{line}");
            }
            println!("\nYou are in a location not marked on the map.");
            self.pause(2.0);
            return Ok(());
        };

        if !self.fast {
            let start = Instant::now();
            let mut blink_on = true;
            while start.elapsed().as_secs() < 3 {
                self.clear()?;
                let lines = if blink_on {
                    map::render(location, "vvv YOU ARE HERE vvv").unwrap_or_default()
                } else {
                    map::plain()
                };
                for line in lines {
                    println!("{line}");
                }
                println!("\n{SCANNING:^80}");
                blink_on = !blink_on;
                self.pause(0.4);
            }
        }

        self.clear()?;
        for line in final_map {
            if line.contains("YOU ARE HERE") {
                println!("{}", line.yellow().bold());
            } else {
                println!("{line}");
            }
        }
        self.wait_for_enter("Post-scan map. Press Enter to close.")
    }

    // -----------------------------------------------------------------------
    // Endings
    // -----------------------------------------------------------------------

    /// Show an ending paragraph by paragraph.
    pub fn ending(&self, ending: Ending) -> Res {
        self.clear()?;
        let paragraphs = ending.paragraphs();
        for (idx, paragraph) in paragraphs.iter().enumerate() {
            if paragraph.trim().is_empty() {
                println!();
                continue;
            }
            for line in wrap(paragraph, self.width) {
                println!("{line}");
            }
            println!();
            if idx + 1 < paragraphs.len() {
                self.wait_for_enter("Press enter to continue...")?;
                println!();
            }
        }

        let title = ending.title();
        let banner = self.center(title);
        match ending {
            Ending::Deportation | Ending::Skeleton => println!("\n\n{}\n\n", banner.red().bold()),
            Ending::Good | Ending::AverageWorker => {
                println!("\n\n{}\n\n", banner.green().bold())
            }
        }
        self.wait_for_enter("Press enter to exit.")
    }
}

fn paint(text: &str, tone: Tone) -> colored::ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Heading => text.bold().bright_white(),
        Tone::Section => text.underline(),
        Tone::Action => text.bright_blue(),
        Tone::Message => text.yellow(),
    }
}

/// `"07:30"` for hour 7.5.
fn clock_time(clock: &ColonyClock) -> String {
    let minutes = (clock.hour() * 60.0).round() as u32;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// The side panel: time, day, balance, quota and one box per quest.
fn stats_box(actor: &Actor, clock: &ColonyClock) -> Vec<String> {
    let quests = Quest::ALL
        .iter()
        .map(|q| if actor.is_quest_complete(*q) { "[✓]" } else { "[ ]" })
        .collect::<Vec<_>>()
        .join(" ");

    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec![Cell::new("STATS").set_alignment(CellAlignment::Center)])
        .add_row(vec![format!("Time: {}", clock_time(clock))])
        .add_row(vec![format!("Day: {}", clock.day())])
        .add_row(vec![format!("Minshin: {}", actor.minshin())])
        .add_row(vec![format!(
            "Quota: {}/{}",
            actor.quota_fulfilled(),
            actor.quota_target()
        )])
        .add_row(vec![Cell::new(quests).set_alignment(CellAlignment::Center)]);
    if let Some(column) = table.column_mut(0) {
        column.set_constraint(ColumnConstraint::Absolute(Width::Fixed(STATS_COLUMN)));
    }

    let mut lines: Vec<String> = table.lines().collect();
    lines.push(String::new());
    lines.push(format!("{:^STATS_WIDTH$}", "Type 'help' for commands"));
    lines
}

/// Word-wrap `text` to `width` columns.
///
/// Blocks that look like ASCII art (multi-line, starting with a box or
/// banner character) are returned line by line untouched.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.contains('\n') && text.trim_start().starts_with(['+', '|', '/', '\\', '*']) {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap(text, 10);
        assert!(lines.iter().all(|line| line.len() <= 10));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_keeps_ascii_art() {
        let art = "+---+\n| a |\n+---+";
        assert_eq!(wrap(art, 2), vec!["+---+", "| a |", "+---+"]);
    }

    #[test]
    fn wrap_keeps_blank_lines() {
        assert_eq!(wrap("one\n\ntwo", 70), vec!["one", "", "two"]);
    }

    #[test]
    fn stats_box_rows_line_up() {
        let actor = Actor::new(&GameConfig::default());
        let clock = ColonyClock::default();
        let stats = stats_box(&actor, &clock);
        let table = &stats[..stats.len() - 2];
        let width = table[0].chars().count();
        assert!(width >= STATS_WIDTH - 2);
        for line in table {
            assert_eq!(line.chars().count(), width, "{line}");
        }
        assert!(table.iter().any(|line| line.contains("STATS")));
        assert!(table.iter().any(|line| line.contains("Time: 00:00")));
        assert!(table.iter().any(|line| line.contains("Minshin: 50")));
        assert!(table.iter().any(|line| line.contains("[ ] [ ] [ ] [ ] [ ]")));
    }

    #[test]
    fn stats_box_marks_completed_quests() {
        let mut actor = Actor::new(&GameConfig::default());
        actor.complete_quest(Quest::Cecil);
        let stats = stats_box(&actor, &ColonyClock::default());
        assert!(stats.iter().any(|line| line.contains("[✓] [ ] [ ] [ ] [ ]")));
    }

    #[test]
    fn clock_time_formats_half_hours() {
        let mut clock = ColonyClock::default();
        clock.set_hour(7.5).unwrap();
        assert_eq!(clock_time(&clock), "07:30");
    }
}
