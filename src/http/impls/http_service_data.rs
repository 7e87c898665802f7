use std::sync::Arc;
use crate::admission::structs::admission_controller::AdmissionController;
use crate::config::structs::configuration::Configuration;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::http::structs::request_log::RequestLog;
use crate::packages::structs::package_index::PackageIndex;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::throttle::structs::transfer_throttle::TransferThrottle;

impl HttpServiceData {
    /// Builds every registry from `config`, with the package index reading
    /// the local filesystem.
    pub fn new(config: Arc<Configuration>) -> HttpServiceData {
        let index = Arc::new(PackageIndex::from_config(&config));
        Self::with_index(config, index)
    }

    pub fn with_index(config: Arc<Configuration>, index: Arc<PackageIndex>) -> HttpServiceData {
        HttpServiceData {
            admission: Arc::new(AdmissionController::from_config(&config.server)),
            throttle: Arc::new(TransferThrottle::from_config(&config.server)),
            index,
            stats: Arc::new(StatsAtomics::new()),
            request_log: Arc::new(RequestLog::new(config.server.request_log_capacity)),
            config,
        }
    }
}
