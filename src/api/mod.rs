//! Remote compliance endpoint

pub mod client;

pub use client::{
    check_compliance, ComplianceApi, ComplianceError, ComplianceRequest, HttpComplianceClient,
};
