use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct HomeLayout {
    pub sidebar: Rect,
    pub search: Rect,
    pub lang_bar: Rect,
    pub results: Rect,
    pub help: Rect,
}

pub struct SidebarLayout {
    pub header: Rect,
    pub lists: Rect,
    pub cards: Rect,
    pub footer: Rect,
}

pub struct LearnLayout {
    pub timer: Rect,
    pub progress: Rect,
    pub card: Rect,
    pub help: Rect,
}

pub fn calculate_home_chunks(area: Rect) -> HomeLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(columns[1]);

    HomeLayout {
        sidebar: columns[0],
        search: main[0],
        lang_bar: main[1],
        results: main[2],
        help: main[3],
    }
}

pub fn calculate_sidebar_chunks(area: Rect) -> SidebarLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    SidebarLayout {
        header: chunks[0],
        lists: chunks[1],
        cards: chunks[2],
        footer: chunks[3],
    }
}

pub fn calculate_learn_chunks(area: Rect) -> LearnLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    LearnLayout {
        timer: chunks[0],
        progress: chunks[1],
        card: chunks[2],
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_layout_fixed_sidebar() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_home_chunks(area);

        assert_eq!(layout.sidebar.width, 34);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.lang_bar.height, 1);
        assert_eq!(layout.help.height, 3);
        assert!(layout.results.height > 0);
        assert!(layout.results.width <= 120 - 34);
    }

    #[test]
    fn test_sidebar_layout_partitions_height() {
        let area = Rect::new(0, 0, 34, 40);
        let layout = calculate_sidebar_chunks(area);

        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.lists.height, 8);
        assert_eq!(layout.footer.height, 2);
        // Margin 1 leaves 38 rows for the four chunks.
        assert_eq!(layout.cards.height, 38 - 2 - 8 - 2);
    }

    #[test]
    fn test_learn_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_learn_chunks(area);

        assert_eq!(layout.timer.height, 4);
        assert_eq!(layout.progress.height, 1);
        assert_eq!(layout.help.height, 3);
        assert!(layout.card.height >= 10);
    }
}
