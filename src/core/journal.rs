use crate::db::journal;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const OP_MAX_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static pattern"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour per journal operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" => Colour::Yellow,
        "clear" => Colour::Red,
        "config_set" | "config_remove" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        "vacuum" => Colour::Blue,
        _ => Colour::White,
    }
}

pub struct JournalLogic;

impl JournalLogic {
    pub fn print(store: &TimeStore) -> AppResult<()> {
        let entries = journal::load(&store.conn)?;

        if entries.is_empty() {
            info("The journal is empty.");
            return Ok(());
        }

        let rendered: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);

                let color = color_for_operation(&e.operation);
                let mut op_target = color.paint(e.operation.as_str()).to_string();
                if !e.target.is_empty() {
                    op_target.push_str(&format!(" ({})", e.target));
                }

                (e.id, date, truncate_visible(&op_target, color), e.message)
            })
            .collect();

        let id_w = rendered
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        println!("📜 Journal:\n");

        for (id, date, op, message) in rendered {
            // padding measured on the text the terminal actually shows
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// Cut "op (target)" to the visible width limit, keeping only the operation
/// word coloured.
fn truncate_visible(colored: &str, color: Colour) -> String {
    let visible = strip_ansi(colored);
    if visible.chars().count() <= OP_MAX_WIDTH {
        return colored.to_string();
    }

    let mut cut: String = visible.chars().take(OP_MAX_WIDTH - 3).collect();
    cut.push_str("...");

    match cut.split_once(' ') {
        Some((word, rest)) => format!("{} {}", color.paint(word), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}
