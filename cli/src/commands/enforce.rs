use ipward_common::config::Config;
use ipward_core::policy::{
    ClientModel, IpAllowlistExecutor, PolicyEvent, PolicyRejection, RequestContext,
};

use crate::terminal::{format, print};

/// A request assembled from command-line flags.
pub struct EnforceRequest {
    pub event: PolicyEvent,
    pub client_id: String,
    pub allowed_ranges: Option<String>,
    pub forwarded_for: Option<String>,
    pub real_ip: Option<String>,
    pub remote_addr: Option<String>,
}

impl EnforceRequest {
    fn client(&self, cfg: &Config) -> ClientModel {
        let client = ClientModel::new(self.client_id.clone());
        match &self.allowed_ranges {
            Some(ranges) => client.with_attribute(cfg.ranges_attribute.clone(), ranges.clone()),
            None => client,
        }
    }

    fn context(&self, cfg: &Config) -> RequestContext {
        let mut context = RequestContext::new(self.remote_addr.clone());
        if let Some(value) = &self.forwarded_for {
            context = context.with_header(&cfg.forwarded_for_header, value.clone());
        }
        if let Some(value) = &self.real_ip {
            context = context.with_header(&cfg.real_ip_header, value.clone());
        }
        context
    }
}

/// Runs the allow-list executor. Returns `false` if the request was rejected.
pub fn enforce(request: EnforceRequest, cfg: &Config) -> bool {
    let executor: IpAllowlistExecutor = IpAllowlistExecutor::new(cfg.clone());
    let client: ClientModel = request.client(cfg);
    let context: RequestContext = request.context(cfg);

    let result: Result<(), PolicyRejection> =
        executor.execute_on_event(&request.event, Some(&client), &context);

    print::set_key_width(["Provider", "Client", "Decision", "Error", "Status", "Reason"]);
    print::aligned_line("Provider", executor.provider_id());
    print::aligned_line("Client", client.client_id.as_str());

    match result {
        Ok(()) => {
            print::aligned_line("Decision", format::verdict(true));
            true
        }
        Err(rejection) => {
            print::aligned_line("Decision", format::verdict(false));
            print::aligned_line("Error", rejection.error_code());
            print::aligned_line("Status", rejection.status().to_string());
            print::aligned_line("Reason", rejection.to_string());
            false
        }
    }
}
