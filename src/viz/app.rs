use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode};
use ratatui::{prelude::*, widgets::*};

use super::{
    components::{event_keycode, help::render_help, Component, Logs, Plot},
    tui::{self, Tui},
    Tab,
};

#[derive(Default, Debug, PartialEq)]
enum State {
    #[default]
    View,
    Quit,
}

/// The root TUI component which holds the plot and log view and runs the render loop
pub struct App {
    state: State,
    tab: Tab,
    show_help: bool,
    plot: Plot,
    logs: Logs,
}

impl App {
    pub fn new(plot: Plot) -> Self {
        Self {
            state: Default::default(),
            tab: Tab::default(),
            show_help: false,
            plot,
            logs: Logs::new(),
        }
    }

    /// Initialize the terminal and block until the user quits
    ///
    /// Restores the terminal on exit
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = tui::init()?;
        let res = self.event_loop(&mut terminal);
        tui::restore()?;
        res
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> io::Result<()> {
        while self.state != State::Quit {
            terminal.draw(|frame| frame.render_widget(&*self, frame.size()))?;

            if event::poll(Duration::from_millis(16))? {
                let event = event::read()?;
                self.handle_event(&event);
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        if self.tab == Tab::Logs && self.logs.handle_ui_event(event) {
            return;
        }

        match event_keycode(event) {
            Some(KeyCode::Char('q')) => self.state = State::Quit,
            Some(KeyCode::Char('h')) => self.show_help = !self.show_help,
            Some(KeyCode::Tab) => self.tab = self.tab.next(),
            _ => {}
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [menu_area, main_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

        Tabs::new(Tab::ALL.map(Tab::title))
            .block(Block::default().padding(Padding::uniform(1)))
            .white()
            .bold()
            .highlight_style(Style::default().light_green())
            .select(self.tab as usize)
            .render(menu_area, buf);

        match self.tab {
            Tab::Plot => self.plot.render(main_area, buf),
            Tab::Logs => self.logs.render_ref(main_area, buf),
        }

        if self.show_help {
            render_help(area, buf, self.tab);
        }
    }
}
