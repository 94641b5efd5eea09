use super::SceneError;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// Image decoding and reference counting of the rendering runtime.
pub trait ImageRuntime: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<ImageId, SceneError>;

    fn release(&self, image: ImageId);
}

/// Owning handle to a decoded image; released on drop unless transferred.
pub struct DecodedImage {
    id: ImageId,
    runtime: Option<Arc<dyn ImageRuntime>>,
}

impl DecodedImage {
    pub fn decode(runtime: &Arc<dyn ImageRuntime>, bytes: &[u8]) -> Result<Self, SceneError> {
        let id = runtime.decode(bytes)?;

        Ok(DecodedImage {
            id,
            runtime: Some(Arc::clone(runtime)),
        })
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Gives up ownership without releasing; the caller becomes responsible.
    pub fn into_raw(mut self) -> ImageId {
        self.runtime = None;
        self.id
    }
}

impl Drop for DecodedImage {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.release(self.id);
        }
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("id", &self.id)
            .field("owned", &self.runtime.is_some())
            .finish()
    }
}
