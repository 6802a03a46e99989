// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

// Recorder installation is process-global; tests build the app repeatedly
// and must share the same handle.
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder")
});

/// 初始化指标系统
///
/// 安装进程级的Prometheus记录器并注册网关指标，
/// 返回用于渲染指标文本的句柄
pub fn init_metrics() -> PrometheusHandle {
    let handle = PROMETHEUS_HANDLE.clone();

    describe_counter!(
        "gateway_provider_requests_total",
        "Total number of proxied provider requests"
    );
    describe_counter!(
        "gateway_provider_errors_total",
        "Total number of proxied provider requests that ended in an error"
    );
    describe_histogram!(
        "gateway_upstream_duration_seconds",
        "Duration of upstream provider calls in seconds"
    );

    handle
}
