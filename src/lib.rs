//! cvsift — batch field extraction from resume collections.
//!
//! Feed it a folder of `.pdf` and `.txt` resumes and it produces one
//! report row per document: file name, candidate name, email address,
//! phone number and most recent graduation year. Extraction is tolerant
//! of OCR noise: known provider-domain typos are corrected, implausible
//! years are rejected, and a document that fails to decode is reported
//! and skipped rather than aborting the batch.

pub mod cli;
pub mod config;
pub mod pipeline;
