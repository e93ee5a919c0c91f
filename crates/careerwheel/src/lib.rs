pub mod config;
pub mod events;

pub mod gui {
    pub mod app;
    pub mod theme;
    pub mod view;
}

pub mod sys {
    pub mod control;
    pub mod export;
    pub mod runtime;
    pub mod server;
}
