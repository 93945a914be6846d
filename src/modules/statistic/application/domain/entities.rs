/// Fixed vocabulary of global totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticKind {
    Comments,
    Topics,
    Categories,
}

impl StatisticKind {
    pub const ALL: [StatisticKind; 3] = [
        StatisticKind::Comments,
        StatisticKind::Topics,
        StatisticKind::Categories,
    ];

    /// Row key in the statistics table.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticKind::Comments => "comments",
            StatisticKind::Topics => "topics",
            StatisticKind::Categories => "categories",
        }
    }

    /// Authoritative total for this kind.
    pub fn count_sql(&self) -> &'static str {
        match self {
            StatisticKind::Comments => "SELECT count(*) AS count FROM comments",
            StatisticKind::Topics => "SELECT count(*) AS count FROM topics",
            StatisticKind::Categories => "SELECT count(*) AS count FROM categories",
        }
    }
}
