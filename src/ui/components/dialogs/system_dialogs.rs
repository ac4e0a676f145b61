use super::common::{self, shortcuts, InstructionShortcut};
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
BEACHCOMBER - points of interest on a map
=========================================

MAP
---
Tab         Select next marker
Shift+Tab   Select previous marker
Enter       Open / close the popup of the selected marker
c           Centre the map on the selected marker
h/j/k/l     Pan west / south / north / east
+ / -       Zoom in / out

CATEGORIES
----------
1           Stays (Accomodation)
2           Attractions
3           Services
4           More (everything else)
0           Show all resources
x           Extend the footer to show the resource cards
Left/Right  Scroll the resource cards

SEARCH
------
/           Focus the search bar
Enter       Search names and descriptions
Esc         Leave the search bar
d           Get directions to the selected marker

GENERAL
-------
:           Go to a path (/ is the map)
r           Retry loading resources after a failure
i           Change icon theme
G           Show logs
?           Toggle this help
q           Quit application
Ctrl+C      Quit application
";

/// Clamp the offset in place, update the scrollbar and return the visible slice of `lines`
fn visible_window<'a>(
    lines: &[&'a str],
    visible_height: usize,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) -> Vec<&'a str> {
    let max_scroll = lines.len().saturating_sub(visible_height);
    let clamped_offset = (*scroll_offset).min(max_scroll);
    *scroll_offset = clamped_offset;

    *scrollbar_state = scrollbar_state
        .content_length(lines.len())
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    lines.iter().skip(clamped_offset).take(visible_height).copied().collect()
}

/// A framed message with instructions on the last line, scrollable when it overflows
#[allow(clippy::too_many_arguments)]
fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    instructions: &[InstructionShortcut],
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let content_area = chunks[0];

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let overflows = lines.len() > visible_height;

    let text = if overflows {
        visible_window(&lines, visible_height, scroll_offset, scrollbar_state).join("\n")
    } else {
        *scroll_offset = 0;
        message.to_string()
    };

    let message_paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(message_paragraph, content_area);
    f.render_widget(common::create_instructions_paragraph(instructions), chunks[1]);

    if overflows {
        f.render_stateful_widget(common::create_scrollbar(), content_area, scrollbar_state);
    }
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    render_message_dialog(
        f,
        area,
        format!(" {} Info ", icons.info()),
        Color::Blue,
        message,
        &[shortcuts::ANY_KEY_CLOSE, shortcuts::SEPARATOR, shortcuts::SCROLL],
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    render_message_dialog(
        f,
        area,
        format!(" {} Error ", icons.error()),
        Color::Red,
        message,
        &[
            shortcuts::ANY_KEY_CLOSE,
            shortcuts::SEPARATOR,
            shortcuts::RETRY,
            shortcuts::SEPARATOR,
            shortcuts::SCROLL,
        ],
        scroll_offset,
        scrollbar_state,
    );
}

/// Full-screen scrollable text panel used by help and logs
fn render_text_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = panel_area.height.saturating_sub(2) as usize;
    let visible = visible_window(&lines, visible_height, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(visible.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, panel_area);

    if lines.len() > visible_height {
        f.render_stateful_widget(common::create_scrollbar(), panel_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    render_text_panel(
        f,
        area,
        " Help - Press 'Esc' or '?' to close ",
        HELP_TEXT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_text_panel(
        f,
        area,
        DIALOG_TITLE_LOGS,
        &content,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_goto_dialog(f: &mut Frame, area: Rect, icons: &IconService, input_buffer: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Go to ", icons.map_title()), Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(common::create_input_paragraph(input_buffer, "Path"), chunks[0]);
    f.render_widget(
        common::create_instructions_paragraph(&[shortcuts::ENTER_GO, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[1],
    );
}
