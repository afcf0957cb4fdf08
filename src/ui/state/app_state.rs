use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::{use_signal, Signal};

use crate::infra::csv_io::reader::CsvFileSource;
use crate::infra::download::DirectoryDownloadSink;
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::session::{CsvSession, Notice};

pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// The toast currently on screen. Each `show` hands out a ticket; expiring
/// an old ticket leaves a newer notice alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    ticket: u64,
    notice: Option<Notice>,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show(&mut self, notice: Notice) -> u64 {
        self.ticket += 1;
        self.notice = Some(notice);
        self.ticket
    }

    pub fn expire(&mut self, ticket: u64) {
        if self.ticket == ticket {
            self.notice = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}

pub struct AppState {
    pub session: Signal<CsvSession>,
    pub notice: Signal<NoticeSlot>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            session: use_signal(move || build_session(download_dir)),
            notice: use_signal(NoticeSlot::default),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}

pub fn build_session(download_dir: PathBuf) -> CsvSession {
    let import_service = Arc::new(ImportService::new(Arc::new(CsvFileSource)));
    let export_service = Arc::new(ExportService::new(Arc::new(DirectoryDownloadSink {
        dir: download_dir,
    })));
    CsvSession::new(import_service, Arc::new(EditService::new()), export_service)
}
