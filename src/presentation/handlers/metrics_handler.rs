// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::Extension;
use metrics_exporter_prometheus::PrometheusHandle;

/// 导出Prometheus指标
///
/// 输出文本格式的指标快照，路由层限定仅超级用户可访问
pub async fn render_metrics(Extension(handle): Extension<PrometheusHandle>) -> String {
    handle.render()
}
