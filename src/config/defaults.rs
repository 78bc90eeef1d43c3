//! Engine constants and default paths.
//!
//! Every fixed count, step and noise level the playback engine uses lives here
//! so tests can target them directly. None of these are section-dependent.

// ============================================================================
// Paths
// ============================================================================

/// Well configuration document read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.xml";

/// Playback table written when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "FEPlayback.csv";

// ============================================================================
// Start-up
// ============================================================================

/// Bit starts this far off bottom (ft).
pub const INITIAL_BIT_OFFSET: f64 = 3.0;

/// First stand number. The driver loop counts stands from here.
pub const FIRST_STAND: u32 = 1;

// ============================================================================
// Drill Phase
// ============================================================================

/// Ticks in the warm-up burst at the start of every drill phase.
pub const WARMUP_TICKS: usize = 20;

/// Bit advance per warm-up tick (ft).
pub const WARMUP_BIT_ADVANCE: f64 = 0.01;

/// Section ROP is given per hour; one tick is one second.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// ROP noise as a fraction of the per-tick ROP.
pub const ROP_NOISE_FRACTION: f64 = 0.01;

/// Pump pressure per combined stroke (psi/spm).
pub const PUMP_PRESSURE_PER_SPM: f64 = 20.0;

/// Upper bound of the random rpm / torque ramp step while drilling.
pub const ROTARY_RAMP_STEP: f64 = 5.0;

/// Upper bound of the random spm ramp step while drilling.
pub const SPM_RAMP_STEP: f64 = 4.0;

// ============================================================================
// Connection Phase
// ============================================================================

/// Distance the bit is pulled off bottom during a connection (ft).
pub const RETRACT_DISTANCE: f64 = 3.0;

/// Bit travel per retraction tick (ft).
pub const RETRACT_STEP: f64 = 0.1;

/// Ticks in the ramp-down after retraction.
pub const RAMP_DOWN_TICKS: usize = 60;

/// Upper bound of the random rpm decrement during ramp-down.
pub const RPM_RAMP_DOWN_STEP: f64 = 5.0;

/// Upper bound of the random torque decrement during ramp-down.
pub const TORQUE_RAMP_DOWN_STEP: f64 = 10.0;

// ============================================================================
// Noise Levels
// ============================================================================

/// Hook load jitter (klbs).
pub const HOOK_LOAD_NOISE: f64 = 1.0;

/// Pit volume jitter around the configured total (bbl).
pub const PIT_VOLUME_NOISE: f64 = 3.0;

/// Bit weight perturbation once at its ceiling.
pub const BIT_WEIGHT_CEILING_NOISE: f64 = 0.5;

/// SPM perturbation once at its ceiling.
pub const SPM_CEILING_NOISE: f64 = 0.5;

/// Flow, rpm and over-ceiling bit weight jitter.
pub const STANDARD_NOISE: f64 = 1.0;

/// Torque jitter at and above its ceiling.
pub const TORQUE_NOISE: f64 = 3.0;
