pub mod data_transfer_service;

pub use data_transfer_service::{DataTransferService, TransferSummary};
