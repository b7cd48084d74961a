/// Rendering context a canvas is handed to.
///
/// A canvas keeps the first context kind it gives out: once `getContext("webgpu")`
/// succeeds, `getContext("2d")` returns null. The canvas may only be claimed
/// for WebGPU after an adapter has been found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasContext {
    WebGpu,
    TwoD,
}

impl CanvasContext {
    /// `has_gpu_api` is `navigator.gpu`, `has_adapter` whether
    /// `requestAdapter` resolved to one.
    pub fn choose(has_gpu_api: bool, has_adapter: bool) -> Self {
        if has_gpu_api && has_adapter {
            Self::WebGpu
        } else {
            Self::TwoD
        }
    }

    /// Argument for `HTMLCanvasElement.getContext`.
    pub fn context_id(self) -> &'static str {
        match self {
            Self::WebGpu => "webgpu",
            Self::TwoD => "2d",
        }
    }
}
