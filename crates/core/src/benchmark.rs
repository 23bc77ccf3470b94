//! The fixed model set used by the mobile LLM battery benchmark.

use crate::task::DownloadTask;

/// Banner printed at the top of a download run.
pub const TITLE: &str = "Mobile LLM Battery Benchmark - Model Downloader";

/// Short description of the model family, printed under the banner.
pub const MODEL_FAMILY: &str = "Qwen2.5-Coder-3B-Instruct (2bit, 3bit, 4bit)";

/// Printed after a run where every model is present.
pub const NEXT_STEPS: &[&str] = &[
    "Copy models to app/src/main/assets/models/",
    "Build the project: ./gradlew assembleDebug",
    "Install on device: adb install app/build/outputs/apk/debug/app-debug.apk",
];

/// The 2, 3 and 4 bit quantizations, in download order.
pub fn benchmark_tasks() -> Vec<DownloadTask> {
    vec![
        DownloadTask::new(
            "irish-quant/Qwen-Qwen2.5-Coder-3B-Instruct-2bit",
            "Qwen2.5-Coder-3B-Instruct-Q2_K.gguf",
            "models/2bit",
            "2-bit quantized (0.5B, smallest, fastest)",
        ),
        DownloadTask::new(
            "irish-quant/Qwen-Qwen2.5-Coder-3B-Instruct-3bit",
            "Qwen2.5-Coder-3B-Instruct-Q3_K_M.gguf",
            "models/3bit",
            "3-bit quantized (0.6B, balanced)",
        ),
        DownloadTask::new(
            "irish-quant/Qwen-Qwen2.5-Coder-3B-Instruct-4bit",
            "Qwen2.5-Coder-3B-Instruct-Q4_K_M.gguf",
            "models/4bit",
            "4-bit quantized (highest quality)",
        ),
    ]
}

/// Repository identifiers of the benchmark tasks, for the listing run.
pub fn benchmark_sources() -> Vec<String> {
    benchmark_tasks().into_iter().map(|t| t.source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_tasks_order() {
        let tasks = benchmark_tasks();
        assert_eq!(tasks.len(), 3);
        assert!(tasks[0].source.ends_with("-2bit"));
        assert!(tasks[1].source.ends_with("-3bit"));
        assert!(tasks[2].source.ends_with("-4bit"));
        assert!(tasks.iter().all(|t| t.filename.ends_with(".gguf")));
    }

    #[test]
    fn test_benchmark_sources_match_tasks() {
        let sources = benchmark_sources();
        let tasks = benchmark_tasks();
        assert_eq!(sources.len(), tasks.len());
        for (source, task) in sources.iter().zip(&tasks) {
            assert_eq!(source, &task.source);
        }
    }
}
