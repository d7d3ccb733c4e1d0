use std::error::Error;
use std::fmt;

use rayon::ThreadPoolBuildError;

use crate::core::colour_table::{COLOUR_TABLE_SIZE, ColourTable, build_colour_table};
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::view_state::ViewState;
use crate::core::engine::{AcceleratedEngine, FrameEngine, FrameParams, ReferenceEngine};

/// Which strategy a session is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Reference,
    Accelerated,
}

impl Backend {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Backend::Reference => "CPU",
            Backend::Accelerated => "Parallel",
        }
    }
}

/// What to do when the accelerated backend cannot be initialised. There is
/// deliberately no default: the caller states its policy at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Surface the backend failure to the caller.
    HardFail,
    /// Log the failure and keep stepping on the reference strategy.
    Reference,
}

#[derive(Debug)]
pub enum AttachAcceleratorError {
    Unavailable(ThreadPoolBuildError),
    AlreadyAttached,
    SessionStepped,
}

impl fmt::Display for AttachAcceleratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(source) => {
                write!(f, "accelerated backend unavailable: {}", source)
            }
            Self::AlreadyAttached => {
                write!(f, "an accelerated strategy is already attached")
            }
            Self::SessionStepped => {
                write!(f, "cannot attach an accelerator after the first step")
            }
        }
    }
}

impl Error for AttachAcceleratorError {}

/// Top-level state owner for one interactive view.
///
/// Owns the view parameters, the colour table, the output buffer and the
/// active strategy. Exactly one `step` runs at a time; the caller mutates
/// `view` and `budget` between steps and reads the buffer after each step.
#[derive(Debug)]
pub struct Session {
    // Declared first: the strategy (and any backend-private resources it
    // holds) must be torn down before the buffers it rendered into.
    engine: Box<dyn FrameEngine>,
    backend: Backend,
    stepped: bool,
    pub view: ViewState,
    pub budget: IterationBudget,
    table: ColourTable,
    buffer: FrameBuffer,
}

impl Session {
    /// Creates a session on the reference strategy with a fixed-size output
    /// buffer and a freshly built colour table.
    pub fn create(width: u32, height: u32, max_iters: u32) -> Result<Self, FrameBufferError> {
        let buffer = FrameBuffer::new(width, height)?;

        Ok(Self {
            engine: Box::new(ReferenceEngine),
            backend: Backend::Reference,
            stepped: false,
            view: ViewState::new(width, height),
            budget: IterationBudget::new(max_iters),
            table: build_colour_table(COLOUR_TABLE_SIZE),
            buffer,
        })
    }

    /// Swaps in the accelerated strategy. Allowed at most once, and only
    /// before the first step. On backend failure the `fallback` policy
    /// decides between surfacing the error and staying on the reference
    /// strategy; there is no silent downgrade.
    pub fn attach_accelerator(
        &mut self,
        fallback: Fallback,
    ) -> Result<Backend, AttachAcceleratorError> {
        self.attach_accelerator_with(AcceleratedEngine::new, fallback)
    }

    fn attach_accelerator_with(
        &mut self,
        init: impl FnOnce() -> Result<AcceleratedEngine, ThreadPoolBuildError>,
        fallback: Fallback,
    ) -> Result<Backend, AttachAcceleratorError> {
        if self.stepped {
            return Err(AttachAcceleratorError::SessionStepped);
        }
        if self.backend == Backend::Accelerated {
            return Err(AttachAcceleratorError::AlreadyAttached);
        }

        match init() {
            Ok(engine) => {
                self.engine = Box::new(engine);
                self.backend = Backend::Accelerated;
                Ok(Backend::Accelerated)
            }
            Err(source) => match fallback {
                Fallback::HardFail => Err(AttachAcceleratorError::Unavailable(source)),
                Fallback::Reference => {
                    log::warn!(
                        "accelerated backend unavailable ({}), staying on reference strategy",
                        source
                    );
                    Ok(Backend::Reference)
                }
            },
        }
    }

    /// Recomputes the whole frame into the output buffer using the active
    /// strategy. Synchronous: all strategy-internal parallelism completes
    /// before this returns.
    pub fn step(&mut self) {
        self.stepped = true;

        let width = self.buffer.width();
        let height = self.buffer.height();
        let params = FrameParams {
            view: &self.view,
            max_iters: self.budget.get(),
            table: &self.table,
            width,
            height,
        };

        self.engine.step(&params, self.buffer.pixels_mut());
    }

    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    #[must_use]
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn colour_table(&self) -> &ColourTable {
        &self.table
    }
}
