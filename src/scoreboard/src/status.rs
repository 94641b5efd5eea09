#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LiveStatus {
    pub is_live: bool,
    pub label: String,
}

impl LiveStatus {
    /// Maps an api-football short status code to the card's live badge.
    pub fn classify(short: &str, elapsed: Option<u32>, extra: Option<u32>) -> Self {
        let label = match short {
            "1H" | "2H" | "ET" => {
                let elapsed = elapsed.unwrap_or(0);
                match extra.filter(|&extra| extra > 0) {
                    Some(extra) => format!("LIVE {elapsed}+{extra}'"),
                    None => format!("LIVE {elapsed}'"),
                }
            }
            "HT" => String::from("LIVE HT"),
            "P" => String::from("LIVE PEN"),
            "BT" => String::from("LIVE BT"),
            _ => return LiveStatus::default(),
        };

        LiveStatus {
            is_live: true,
            label,
        }
    }
}
