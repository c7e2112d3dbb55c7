use std::env;
use std::sync::OnceLock;

fn use_color() -> bool {
    static USE_COLOR: OnceLock<bool> = OnceLock::new();
    *USE_COLOR.get_or_init(|| env::var_os("NO_COLOR").is_none())
}

fn paint(code: &str, text: &str) -> String {
    if use_color() {
        format!("\u{1b}[{}m{}\u{1b}[0m", code, text)
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    paint("2", text)
}

pub fn bold(text: &str) -> String {
    paint("1", text)
}

fn yellow(text: &str) -> String {
    paint("33", text)
}

fn red(text: &str) -> String {
    paint("31", text)
}

fn token_code(token: &str) -> Option<&'static str> {
    match token {
        "charts.red" => Some("31"),
        "charts.green" => Some("32"),
        "charts.yellow" => Some("33"),
        "charts.blue" => Some("34"),
        "charts.purple" => Some("35"),
        "charts.orange" => Some("91"),
        "charts.gray" => Some("90"),
        _ => None,
    }
}

pub fn tint(token: Option<&str>, text: &str) -> String {
    match token.and_then(token_code) {
        Some(code) => paint(code, text),
        None => text.to_string(),
    }
}

pub fn header(command: &str, version: &str) {
    eprintln!("{}", dim(&format!("nmi {} v{}", command, version)));
    eprintln!();
}

pub fn warn(message: &str) {
    let tag = yellow("warn");
    eprintln!("{} {}", tag, message);
}

pub fn error(message: &str) {
    let tag = red("error");
    eprintln!("{} {}", tag, message);
}

pub fn info(message: &str) {
    println!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tokens_stay_plain() {
        assert_eq!(tint(None, "lodash"), "lodash");
        assert_eq!(tint(Some("editor.foreground"), "lodash"), "lodash");
    }

    #[test]
    fn every_kind_colour_has_a_code() {
        use crate::types::{DependencyKind, LocationKind};

        for kind in DependencyKind::ALL {
            if let Some(color) = kind.info().color {
                assert!(token_code(color).is_some(), "{color}");
            }
        }
        for kind in LocationKind::ALL {
            if let Some(color) = kind.info().color {
                assert!(token_code(color).is_some(), "{color}");
            }
        }
    }
}
