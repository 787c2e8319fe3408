// self
use crate::{_prelude::*, error::RegistrationError, obs::RegistrationStage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRegistration<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRegistration<F> = F;

/// A span builder used by the registrar.
#[derive(Clone, Debug)]
pub struct RegistrationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RegistrationSpan {
	/// Creates a new span starting at the provided stage.
	pub fn new(stage: RegistrationStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth2_registrar.registration", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Moves the span to the next stage of the transaction.
	pub fn record_stage(&self, stage: RegistrationStage) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("stage", stage.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRegistration<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Reports a client-caused rejection; these are expected and never logged as faults.
pub fn report_rejection(error: &RegistrationError) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			error = error.error.as_str(),
			description = %error.error_description,
			"client registration rejected"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}

/// Reports an internal failure to the operator-facing channel.
pub fn report_failure(error: &(dyn std::error::Error + 'static)) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(error = error, "client registration failed");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}
