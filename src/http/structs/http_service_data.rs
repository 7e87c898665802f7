use std::sync::Arc;
use crate::admission::structs::admission_controller::AdmissionController;
use crate::config::structs::configuration::Configuration;
use crate::http::structs::request_log::RequestLog;
use crate::packages::structs::package_index::PackageIndex;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::throttle::structs::transfer_throttle::TransferThrottle;

#[derive(Debug)]
pub struct HttpServiceData {
    pub config: Arc<Configuration>,
    pub admission: Arc<AdmissionController>,
    pub throttle: Arc<TransferThrottle>,
    pub index: Arc<PackageIndex>,
    pub stats: Arc<StatsAtomics>,
    pub request_log: Arc<RequestLog>,
}
