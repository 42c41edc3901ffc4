use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::EmbeddingError;

/// Picks the device the embedder runs on.
///
/// With `force_cpu` set, or when no GPU backend is compiled in, this is always the CPU.
/// Otherwise Metal is tried before CUDA, and any failure falls back to the CPU.
pub fn select_device(force_cpu: bool) -> Result<Device, EmbeddingError> {
    if force_cpu {
        debug!("CPU device forced by configuration");
        return Ok(Device::Cpu);
    }

    if !cfg!(any(feature = "metal", feature = "cuda")) {
        debug!("No GPU backend compiled, using CPU");
        return Ok(Device::Cpu);
    }

    #[allow(unused_mut)]
    let mut failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                info!("Embedding on Metal GPU");
                return Ok(device);
            }
            Err(e) => failures.push(format!("metal: {e}")),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!("Embedding on CUDA GPU");
                return Ok(device);
            }
            Err(e) => failures.push(format!("cuda: {e}")),
        }
    }

    warn!(failures = %failures.join("; "), "GPU unavailable, falling back to CPU");
    Ok(Device::Cpu)
}

/// Short name for logs.
pub fn device_label(device: &Device) -> &'static str {
    match device {
        Device::Cpu => "cpu",
        Device::Cuda(_) => "cuda",
        Device::Metal(_) => "metal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_cpu_always_selects_cpu() {
        let device = select_device(true).unwrap();
        assert_eq!(device_label(&device), "cpu");
    }

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    #[test]
    fn test_without_gpu_features_selects_cpu() {
        let device = select_device(false).unwrap();
        assert!(device.is_cpu());
    }
}
