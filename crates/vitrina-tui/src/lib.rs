// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::io;
use std::time::Duration;
use vitrina_app::{
    EditField, EditPanel, Feedback, FeedbackKind, PriceLabel, Product, ShelfProjector, SlotPhase,
    SubmitAction,
};
use vitrina_catalog::UpdateOutcome;

const CURSOR_MARK: &str = "▏";
const SLOT_MARK: &str = "▶";

/// One renderable product on the terminal shelf. Holds its own copies of
/// the display strings; the catalog is never referenced from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfUnit {
    pub name: String,
    pub price_label: String,
    pub description: String,
}

/// Terminal implementation of the shelf projector: a unit per catalog
/// index, rendered as one panel in a horizontal row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminalShelf {
    units: Vec<ShelfUnit>,
}

impl TerminalShelf {
    pub fn units(&self) -> &[ShelfUnit] {
        &self.units
    }
}

impl ShelfProjector for TerminalShelf {
    fn materialize(&mut self, index: usize, product: &Product) -> Result<()> {
        if index != self.units.len() {
            bail!(
                "shelf units must materialize in sequence order; got index {index} with {} units",
                self.units.len()
            );
        }
        self.units.push(ShelfUnit {
            name: product.name.clone(),
            price_label: PriceLabel::Amount(product.price).render(),
            description: product.description.clone(),
        });
        Ok(())
    }

    fn set_name(&mut self, index: usize, name: &str) {
        if let Some(unit) = self.units.get_mut(index) {
            unit.name = name.to_owned();
        }
    }

    fn set_price(&mut self, index: usize, price: PriceLabel) {
        if let Some(unit) = self.units.get_mut(index) {
            unit.price_label = price.render();
        }
    }

    fn set_description(&mut self, index: usize, description: &str) {
        if let Some(unit) = self.units.get_mut(index) {
            unit.description = description.to_owned();
        }
    }
}

/// Host-side operations the event loop needs. All calls run on the loop's
/// own thread; there is no concurrent mutation to coordinate.
pub trait AppRuntime {
    fn catalog_snapshot(&mut self) -> Vec<Product>;
    fn shelf_units(&mut self) -> Vec<ShelfUnit>;
    fn apply_edit(&mut self, index: usize, name: &str, price: f64) -> Result<UpdateOutcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub show_descriptions: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            show_descriptions: true,
        }
    }
}

#[derive(Debug)]
struct ViewData {
    panel: EditPanel,
    units: Vec<ShelfUnit>,
    selected: usize,
    field: EditField,
    show_descriptions: bool,
}

impl ViewData {
    fn new(options: UiOptions) -> Self {
        Self {
            panel: EditPanel::default(),
            units: Vec::new(),
            selected: 0,
            field: EditField::Name,
            show_descriptions: options.show_descriptions,
        }
    }
}

pub fn run_app<R: AppRuntime>(
    runtime: &mut R,
    options: UiOptions,
    startup_feedback: Option<Feedback>,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(options);
    view_data.units = runtime.shelf_units();
    if let Some(feedback) = startup_feedback {
        view_data.panel.set_feedback(feedback);
    }

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(runtime, &mut view_data, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

/// Returns `true` when the app should exit.
fn handle_key_event<R: AppRuntime>(
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if !view_data.panel.is_visible() {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('e') => open_panel(runtime, view_data),
            _ => {}
        }
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            view_data.panel.toggle(&runtime.catalog_snapshot());
        }
        (KeyCode::Up, _) => {
            view_data.selected = view_data.selected.saturating_sub(1);
        }
        (KeyCode::Down, _) => {
            let last = view_data.panel.slots().len().saturating_sub(1);
            view_data.selected = (view_data.selected + 1).min(last);
        }
        (KeyCode::Tab, _) => {
            view_data.field = match view_data.field {
                EditField::Name => EditField::Price,
                EditField::Price => EditField::Name,
            };
        }
        (KeyCode::Backspace, _) => {
            view_data
                .panel
                .pop_input(view_data.selected, view_data.field);
        }
        (KeyCode::Enter, _) => submit_selected(runtime, view_data),
        (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            view_data
                .panel
                .push_input(view_data.selected, view_data.field, ch);
        }
        _ => {}
    }
    false
}

fn open_panel<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) {
    view_data.panel.toggle(&runtime.catalog_snapshot());
    view_data.selected = 0;
    view_data.field = EditField::Name;
}

fn submit_selected<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) {
    let SubmitAction::Apply { index, name, price } = view_data.panel.submit(view_data.selected)
    else {
        return;
    };

    match runtime.apply_edit(index, &name, price) {
        Ok(UpdateOutcome::Applied) => {
            view_data.units = runtime.shelf_units();
            let snapshot = runtime.catalog_snapshot();
            view_data.panel.confirm_applied(&snapshot);
        }
        // stale slots are dropped by the store; nothing to repaint
        Ok(UpdateOutcome::Stale) => {}
        Err(error) => {
            view_data
                .panel
                .set_feedback(Feedback::error(format!("product update failed: {error}")));
        }
    }
}

fn render(frame: &mut ratatui::Frame<'_>, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    render_shelf(frame, layout[0], view_data);

    let feedback_widget = Paragraph::new(feedback_text(view_data))
        .style(Style::default().fg(feedback_color(view_data)))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(feedback_widget, layout[1]);

    if view_data.panel.is_visible() {
        let area = centered_rect(72, 70, frame.area());
        frame.render_widget(Clear, area);
        let panel = Paragraph::new(render_panel_text(view_data)).block(
            Block::default()
                .title("modify products")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(panel, area);
    }
}

fn render_shelf(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    if view_data.units.is_empty() {
        let empty = Paragraph::new("shelf is empty -- no catalog loaded")
            .block(Block::default().title("vitrina").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let unit_count = view_data.units.len();
    let constraints = vec![Constraint::Ratio(1, unit_count as u32); unit_count];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, unit) in view_data.units.iter().enumerate() {
        let body = unit_text(unit, view_data.show_descriptions);
        let widget = Paragraph::new(body).block(
            Block::default()
                .title(format!(" {} ", index + 1))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White)),
        );
        frame.render_widget(widget, columns[index]);
    }
}

fn unit_text(unit: &ShelfUnit, show_descriptions: bool) -> String {
    let mut lines = vec![unit.name.clone(), unit.price_label.clone()];
    if show_descriptions && !unit.description.is_empty() {
        lines.push(String::new());
        lines.push(unit.description.clone());
    }
    lines.join("\n")
}

fn render_panel_text(view_data: &ViewData) -> String {
    if view_data.panel.slots().is_empty() {
        return "no products to modify".to_owned();
    }

    let mut lines = Vec::new();
    for (index, slot) in view_data.panel.slots().iter().enumerate() {
        let selected = index == view_data.selected;
        let marker = if selected { SLOT_MARK } else { " " };
        lines.push(format!(
            "{marker} {} -- {}{}",
            slot.name_label,
            slot.price_label,
            slot_phase_tag(slot.phase),
        ));
        lines.push(format!(
            "    name:  {}",
            input_field_text(&slot.name_input, selected && view_data.field == EditField::Name)
        ));
        lines.push(format!(
            "    price: {}",
            input_field_text(
                &slot.price_input,
                selected && view_data.field == EditField::Price
            )
        ));
        lines.push(String::new());
    }
    lines.push("↑/↓ slot   tab field   enter submit   esc close".to_owned());
    lines.join("\n")
}

const fn slot_phase_tag(phase: SlotPhase) -> &'static str {
    match phase {
        SlotPhase::DirtyInvalid => "  [invalid]",
        SlotPhase::DirtyValid | SlotPhase::Clean | SlotPhase::Hidden => "",
    }
}

fn input_field_text(input: &str, active: bool) -> String {
    if active {
        format!("{input}{CURSOR_MARK}")
    } else {
        input.to_owned()
    }
}

fn feedback_text(view_data: &ViewData) -> String {
    match view_data.panel.feedback() {
        Some(feedback) => feedback.message.clone(),
        None => "e modify products   q quit".to_owned(),
    }
}

fn feedback_color(view_data: &ViewData) -> Color {
    match view_data.panel.feedback() {
        Some(feedback) => match feedback.kind {
            FeedbackKind::Success => Color::Green,
            FeedbackKind::Error => Color::Red,
            FeedbackKind::Info => Color::Blue,
        },
        None => Color::DarkGray,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
