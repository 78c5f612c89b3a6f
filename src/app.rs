//! # Application Context Module
//!
//! `PlotterApp` is the explicit application context replacing the reference
//! program's single global window: it owns the three free-text input fields
//! (function, min x, max x), the render settings, and the registered event
//! handlers. The plot action is single-shot and synchronous; nothing persists
//! between plot requests besides the inputs themselves, and no error is fatal:
//! the user corrects a field and triggers the action again.

use crate::Utils::plots::plot_series;
use crate::plotting::normalizer::normalize;
use crate::plotting::sampler::{DEFAULT_STEP, Domain, PlotError, sample_over};
use chrono::Local;
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

/// Notifications raised by the plot action, delivered to every handler
/// registered with [`PlotterApp::on_event`]. This is the explicit
/// observer wiring that replaces GUI signal/slot connections.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotEvent {
    /// the action succeeded; carries the status-bar text
    Status(String),
    /// the action failed; carries the error to show as a blocking notification
    Failure(PlotError),
}

pub struct PlotterApp {
    /// free-text function field
    pub expression_input: Option<String>,
    /// free-text minimum-x field
    pub min_x_input: Option<String>,
    /// free-text maximum-x field
    pub max_x_input: Option<String>,
    /// mesh step between sample points
    pub step: f64,
    /// directory the PNG files are written into
    pub output_dir: PathBuf,
    /// rendered image size in pixels
    pub image_size: (u32, u32),
    /// "debug" | "info" | "warn" | "error"; "off"/"none" disables logging
    pub loglevel: Option<String>,

    handlers: Vec<Box<dyn Fn(&PlotEvent)>>,
}

impl PlotterApp {
    pub fn new() -> PlotterApp {
        PlotterApp {
            expression_input: None,
            min_x_input: None,
            max_x_input: None,
            step: DEFAULT_STEP,
            output_dir: PathBuf::from("."),
            image_size: (800, 600),
            loglevel: None,
            handlers: Vec::new(),
        }
    }

    pub fn set_expression(&mut self, text: &str) {
        self.expression_input = Some(text.to_string());
    }

    pub fn set_min_x(&mut self, text: &str) {
        self.min_x_input = Some(text.to_string());
    }

    pub fn set_max_x(&mut self, text: &str) {
        self.max_x_input = Some(text.to_string());
    }

    pub fn set_output_dir(&mut self, dir: &Path) {
        self.output_dir = dir.to_path_buf();
    }

    pub fn set_loglevel(&mut self, loglevel: Option<&str>) {
        self.loglevel = if let Some(level) = loglevel {
            assert!(
                level == "debug"
                    || level == "info"
                    || level == "warn"
                    || level == "error"
                    || level == "off"
                    || level == "none",
                "loglevel must be debug, info, warn, error, off or none"
            );
            Some(level.to_string())
        } else {
            None
        };
    }

    /// Registers a handler for status and failure events.
    pub fn on_event(&mut self, handler: impl Fn(&PlotEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    fn emit(&self, event: &PlotEvent) {
        for handler in &self.handlers {
            handler(event);
        }
    }

    /// Validates the three text fields the way the input form does: all
    /// fields present, numeric bounds, min strictly below max. Returns the
    /// raw expression text and parsed bounds.
    pub fn validate_inputs(&self) -> Result<(String, f64, f64), PlotError> {
        let expression = self.expression_input.as_deref().unwrap_or("");
        if normalize(expression).is_empty() {
            return Err(PlotError::MissingInput(
                "Please enter a function.".to_string(),
            ));
        }

        let min_text = self.min_x_input.as_deref().unwrap_or("").trim();
        let max_text = self.max_x_input.as_deref().unwrap_or("").trim();
        if min_text.is_empty() || max_text.is_empty() {
            return Err(PlotError::MissingInput(
                "Please enter min and max values for x.".to_string(),
            ));
        }

        let min_x: f64 = min_text.parse().map_err(|_| {
            PlotError::InvalidBounds("Invalid min or max value for x.".to_string())
        })?;
        let max_x: f64 = max_text.parse().map_err(|_| {
            PlotError::InvalidBounds("Invalid min or max value for x.".to_string())
        })?;
        if min_x >= max_x {
            return Err(PlotError::InvalidBounds(
                "Min X must be less than Max X.".to_string(),
            ));
        }

        Ok((expression.to_string(), min_x, max_x))
    }

    // wrapper around the plot action to implement logging and event delivery
    pub fn plot(&mut self) -> Result<PathBuf, PlotError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if !is_logging_disabled {
            let log_option = match self.loglevel.as_deref() {
                Some("debug") | Some("info") | None => LevelFilter::Info,
                Some("warn") => LevelFilter::Warn,
                Some("error") => LevelFilter::Error,
                Some(_) => panic!("loglevel must be debug, info, warn or error"),
            };
            // the logger can be installed only once per process
            let _ = CombinedLogger::init(vec![TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]);
        }

        match self.plot_action() {
            Ok(path) => {
                info!("plot saved to {}", path.display());
                self.emit(&PlotEvent::Status(
                    "Function plotted successfully.".to_string(),
                ));
                Ok(path)
            }
            Err(err) => {
                error!("{}", err);
                self.emit(&PlotEvent::Failure(err.clone()));
                Err(err)
            }
        }
    }

    // the plot action proper: validate, sample, render
    fn plot_action(&self) -> Result<PathBuf, PlotError> {
        let (expression, min_x, max_x) = self.validate_inputs()?;
        let normalized = normalize(&expression);
        info!(
            "plotting '{}' over [{}, {}] with step {}",
            normalized, min_x, max_x, self.step
        );

        let domain = Domain::with_step(min_x, max_x, self.step)?;
        let (x, y) = sample_over(&normalized, &domain)?;

        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let filename = self.output_dir.join(format!("plot_{}.png", date_and_time));
        plot_series(&expression, &x, &y, &filename, self.image_size)?;
        Ok(filename)
    }
}

impl Default for PlotterApp {
    fn default() -> Self {
        PlotterApp::new()
    }
}
