//! Job manager operations and records.

use crate::api::macros::{zapi_iter_op, zapi_object};

zapi_iter_op! {
    /// Lists jobs known to the cluster job manager.
    JobGetIter => "job-get-iter",
    record: JobInfo { job_info => "job-info" }
}

zapi_object! {
    /// One job tracked by the cluster job manager.
    pub struct JobInfo => "job-info" {
        is_restarted: bool => "is-restarted",
        job_category: String => "job-category",
        job_completion: String => "job-completion",
        job_description: String => "job-description",
        job_end_time: i64 => "job-end-time",
        job_id: i64 => "job-id",
        job_name: String => "job-name",
        job_node: String => "job-node",
        job_progress: String => "job-progress",
        job_queue_time: i64 => "job-queue-time",
        job_schedule: String => "job-schedule",
        job_start_time: i64 => "job-start-time",
        job_state: String => "job-state",
        job_status_code: i64 => "job-status-code",
        job_type: String => "job-type",
        job_username: String => "job-username",
        job_uuid: String => "job-uuid",
        job_vserver: String => "job-vserver",
    }
}
