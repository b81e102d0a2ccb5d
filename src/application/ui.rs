#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::Notification;
use crate::domain::models::NotificationKind;
use crate::domain::models::RequestOutcome;
use crate::domain::models::RequestState;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::IngredientRecipeSession;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Add the typed ingredient to the list.
- Up arrow / Down arrow - Select an ingredient in the list.
- CTRL+X - Remove the selected ingredient.
- CTRL+G - Get a recipe for the listed ingredients.
- Esc / Enter - Dismiss a notification.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

fn render_ingredients<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    session: &IngredientRecipeSession,
    list_state: &mut ListState,
) {
    let items = session
        .ingredients()
        .iter()
        .enumerate()
        .map(|(idx, ingredient)| {
            return ListItem::new(format!("({}) {ingredient}", idx + 1));
        })
        .collect::<Vec<ListItem>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!("Ingredients ({})", session.ingredients().len()))
                .padding(Padding::new(1, 1, 0, 0)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, rect, list_state);
}

fn render_recipe<B: Backend>(frame: &mut Frame<B>, rect: Rect, session: &IngredientRecipeSession) {
    let text = match session.recipe() {
        Some(recipe) => recipe.text().to_string(),
        None => "Add a few ingredients, then press CTRL+G to get a recipe.".to_string(),
    };

    frame.render_widget(
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Recipe")
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .wrap(Wrap { trim: false }),
        rect,
    );
}

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, session: &IngredientRecipeSession) {
    let status = match session.request_state() {
        RequestState::Idle => "Ready",
        RequestState::InFlight => "Waiting for the model",
        RequestState::Completed(RequestOutcome::Success) => "Recipe ready",
        RequestState::Completed(RequestOutcome::Failure) => "Last request failed",
    };

    frame.render_widget(
        Paragraph::new(format!(
            "{status} | Enter: add | CTRL+X: remove | CTRL+G: get recipe | CTRL+C: quit"
        ))
        .style(Style::default().add_modifier(Modifier::DIM)),
        rect,
    );
}

fn render_notification<B: Backend>(frame: &mut Frame<B>, notification: &Notification) {
    let area = frame.size();
    let width = area.width.saturating_sub(4).min(60);
    let height = 7.min(area.height);
    let rect = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let color = match notification.kind {
        NotificationKind::Alert => Color::Yellow,
        NotificationKind::Error => Color::Red,
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(format!("{}\n\n(Press Enter to dismiss)", notification.body))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(color))
                    .title(notification.title.to_string())
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn clamp_selection(list_state: &mut ListState, len: usize) {
    if len == 0 {
        list_state.select(None);
        return;
    }

    let idx = list_state.selected().unwrap_or(len - 1).min(len - 1);
    list_state.select(Some(idx));
}

/// The list is frozen while a request is in flight, the same as adding.
fn remove_selected(session: &mut IngredientRecipeSession, list_state: &mut ListState) {
    if session.is_loading() {
        return;
    }

    if let Some(idx) = list_state.selected() {
        session.remove_ingredient(idx);
        clamp_selection(list_state, session.ingredients().len());
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut IngredientRecipeSession,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let mut list_state = ListState::default();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        for ingredient in ["eggs", "tomatoes", "cheese"] {
            session.add_ingredient(ingredient);
        }
    }

    tx.send(Action::BackendHealthCheck())?;

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(3),
                    Constraint::Percentage(30),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ])
                .split(frame.size());

            if session.is_loading() {
                loading.render(frame, layout[0]);
            } else {
                frame.render_widget(textarea.widget(), layout[0]);
            }

            render_ingredients(frame, layout[1], session, &mut list_state);
            render_recipe(frame, layout[2], session);
            render_status(frame, layout[3], session);

            if let Some(notification) = session.notification() {
                render_notification(frame, notification);
            }
        })?;

        let event = events.next().await?;

        if session.notification().is_some() {
            match event {
                Event::KeyboardEnter() | Event::KeyboardEsc() => {
                    session.dismiss_notification();
                    continue;
                }
                Event::KeyboardCharInput(_)
                | Event::KeyboardPaste(_)
                | Event::KeyboardCTRLG()
                | Event::KeyboardCTRLX() => {
                    continue;
                }
                _ => (),
            }
        }

        match event {
            Event::BackendHealthCheckFailed(err) => {
                session.notify(Notification::error(
                    "Backend unavailable",
                    &format!("The recipe backend can't be reached, requests will likely fail.\n\nError: {err}"),
                ));
            }
            Event::RecipeResponse(outcome) => {
                if let Err(err) = session.complete_request(outcome) {
                    tracing::debug!(error = %err, "Recipe request did not produce a recipe");
                }
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLG() => {
                if session.is_loading() {
                    continue;
                }

                match session.begin_request() {
                    Ok(prompt) => tx.send(Action::RequestRecipe(prompt))?,
                    Err(err) => tracing::debug!(error = %err, "Recipe request rejected"),
                }
            }
            Event::KeyboardCTRLX() => {
                remove_selected(session, &mut list_state);
            }
            Event::KeyboardEnter() => {
                if session.is_loading() {
                    continue;
                }

                if session.submit_pending_input() && session.pending_input().is_empty() {
                    textarea = TextArea::default();
                    list_state.select(Some(session.ingredients().len() - 1));
                }
            }
            Event::KeyboardEsc() => (),
            Event::KeyboardCharInput(input) => {
                if !session.is_loading() {
                    textarea.input(input);
                    session.set_pending_input(&textarea.lines().join(" "));
                }
            }
            Event::KeyboardPaste(text) => {
                if !session.is_loading() {
                    textarea.insert_str(text.replace('\n', " "));
                    session.set_pending_input(&textarea.lines().join(" "));
                }
            }
            Event::UISelectDown() => {
                let len = session.ingredients().len();
                if len > 0 {
                    let idx = list_state.selected().map_or(0, |idx| return (idx + 1).min(len - 1));
                    list_state.select(Some(idx));
                }
            }
            Event::UISelectUp() => {
                let idx = list_state.selected().map_or(0, |idx| return idx.saturating_sub(1));
                list_state.select(Some(idx));
                clamp_selection(&mut list_state, session.ingredients().len());
            }
            Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    mut session: IngredientRecipeSession,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut session, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
