// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    cat::Cat,
    config::{
        options::AppOptions,
        state::{AppState, PageKind},
    },
    store::{CatStore, JsonFileStorage},
    view,
};

use super::{
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState { options: AppOptions::from_env(), ..AppState::default() };
    eframe::run_native(
        "Cat Tracker",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// A question waiting on the user before something destructive runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pending {
    Delete { id: String, name: String },
    ImportCsv,
}

pub struct App {
    pub state: AppState,
    pub store: CatStore<JsonFileStorage>,

    // snapshot of the store, refreshed after every write
    pub cats: Vec<Cat>,
    // indices into `cats` after search + sort
    pub row_ix: Vec<usize>,

    pub status: Arc<Mutex<String>>,
    pub pending: Option<Pending>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let dir = state.options.tracker.store_dir.clone();
        crate::log::init(&dir);

        let store = CatStore::open(&dir);
        logf!("Init: store={}", store.storage().path().display());

        let mut app = Self {
            state,
            store,
            cats: Vec::new(),
            row_ix: Vec::new(),
            status: Arc::new(Mutex::new(s!("Ready"))),
            pending: None,
        };
        app.reload();
        logf!("Init: {} cats loaded, page={:?}", app.cats.len(), app.state.gui.current_page);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(self.state.gui.current_page) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        let mut slot = self.status.lock().unwrap_or_else(|p| p.into_inner());
        *slot = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Re-read the store, then rebuild the visible rows.
    pub fn reload(&mut self) {
        self.cats = self.store.list_all();
        self.rebuild_view();
    }

    pub fn rebuild_view(&mut self) {
        let gui = &self.state.gui;
        self.row_ix = view::filter_sorted(&self.cats, &gui.search_query, gui.sort);
    }

    pub fn switch_page(&mut self, kind: PageKind) {
        let prev = self.state.gui.current_page;
        if prev == kind { return; }
        logf!("UI: Tab switch {:?} → {:?}", prev, kind);
        self.state.gui.current_page = kind;
        let page = self.current_page();
        page.on_enter(self);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            components::tabs::draw(ui, self);
            ui.add_space(2.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            page.draw(ui, self);
        });

        components::confirm::draw(ctx, self);
    }
}
