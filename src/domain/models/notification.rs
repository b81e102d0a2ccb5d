#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Blocks the screen until acknowledged.
    Alert,
    /// Dismissable failure report.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn alert(title: &str, body: &str) -> Notification {
        return Notification {
            kind: NotificationKind::Alert,
            title: title.to_string(),
            body: body.to_string(),
        };
    }

    pub fn error(title: &str, body: &str) -> Notification {
        return Notification {
            kind: NotificationKind::Error,
            title: title.to_string(),
            body: body.to_string(),
        };
    }

    pub fn missing_ingredients() -> Notification {
        return Notification::alert(
            "Missing ingredients",
            "Please enter at least one ingredient",
        );
    }

    pub fn fetch_failed() -> Notification {
        return Notification::error(
            "Could not fetch recipe",
            "Failed to fetch recipe, please try again.",
        );
    }
}
