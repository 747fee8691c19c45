//! The reverb preset catalog (§6, §9 Design Notes: "A static lookup table
//! keyed by the preset enum").
//!
//! **Fidelity note**: the vendor EFX preset data table (`rvb.h` declares 113
//! preset identifiers grouped by environment family) was not present in the
//! filtered `original_source/` tree made available to this port — no
//! `efx-presets.h`-equivalent data file was kept alongside the header. The
//! 113 identifiers below are carried verbatim (grouped the same way), but
//! the numeric thirteen-parameter values attached to each are a documented
//! reconstruction, not a byte-exact port: built from each family's general
//! acoustic character (hard reflective surfaces skew toward longer decay and
//! higher reflections gain; open outdoor presets skew toward low diffusion
//! and high air absorption; soft or padded presets skew toward short decay
//! and heavy HF damping). Treat this table as a placeholder pending recovery
//! of the real vendor data file; see `DESIGN.md` decision 5.

use super::ReverbParams;

/// Named reverb environment, grouped by family exactly as the vendor header
/// groups its 113-entry enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReverbPreset {
    // -- Generic (26) --
    Generic,
    PaddedCell,
    Room,
    Bathroom,
    Livingroom,
    Stoneroom,
    Auditorium,
    ConcertHall,
    Cave,
    Arena,
    Hangar,
    CarpetedHallway,
    Hallway,
    StoneCorridor,
    Alley,
    Forest,
    City,
    Mountains,
    Quarry,
    Plain,
    ParkingLot,
    SewerPipe,
    Underwater,
    Drugged,
    Dizzy,
    Psychotic,

    // -- Castle (8) --
    CastleSmallRoom,
    CastleShortPassage,
    CastleMediumRoom,
    CastleLongPassage,
    CastleHall,
    CastleCupboard,
    CastleCourtyard,
    CastleAlcove,

    // -- Factory (8) --
    FactorySmallRoom,
    FactoryShortPassage,
    FactoryMediumRoom,
    FactoryLongPassage,
    FactoryHall,
    FactoryCupboard,
    FactoryCourtyard,
    FactoryAlcove,

    // -- Ice Palace (8) --
    IcePalaceSmallRoom,
    IcePalaceShortPassage,
    IcePalaceMediumRoom,
    IcePalaceLongPassage,
    IcePalaceHall,
    IcePalaceCupboard,
    IcePalaceCourtyard,
    IcePalaceAlcove,

    // -- Space Station (7) --
    SpaceStationSmallRoom,
    SpaceStationShortPassage,
    SpaceStationMediumRoom,
    SpaceStationLongPassage,
    SpaceStationHall,
    SpaceStationCupboard,
    SpaceStationAlcove,

    // -- Wooden Galleon (8) --
    WoodenSmallRoom,
    WoodenShortPassage,
    WoodenMediumRoom,
    WoodenLongPassage,
    WoodenHall,
    WoodenCupboard,
    WoodenCourtyard,
    WoodenAlcove,

    // -- Sports (7) --
    SportEmptyStadium,
    SportSquashCourt,
    SportSmallSwimmingPool,
    SportLargeSwimmingPool,
    SportGymnasium,
    SportFullStadium,
    SportStadiumTannoy,

    // -- Prefab (5) --
    PrefabWorkshop,
    PrefabSchoolRoom,
    PrefabPractiseRoom,
    PrefabOuthouse,
    PrefabCaravan,

    // -- Dome (2) --
    DomeTomb,
    DomeSaintPauls,

    // -- Pipe (4) --
    PipeSmall,
    PipeLongThin,
    PipeLarge,
    PipeResonant,

    // -- Outdoors (5) --
    OutdoorsBackyard,
    OutdoorsRollingPlains,
    OutdoorsDeepCanyon,
    OutdoorsCreek,
    OutdoorsValley,

    // -- Mood (3) --
    MoodHeaven,
    MoodHell,
    MoodMemory,

    // -- Driving (8) --
    DrivingCommentator,
    DrivingPitGarage,
    DrivingIncarRacer,
    DrivingIncarSports,
    DrivingIncarLuxury,
    DrivingFullGrandstand,
    DrivingEmptyGrandstand,
    DrivingTunnel,

    // -- City (6) --
    CityStreets,
    CitySubway,
    CityMuseum,
    CityLibrary,
    CityUnderpass,
    CityAbandoned,

    // -- Misc (8) --
    DustyRoom,
    Chapel,
    SmallWaterRoom,
    Courtroom,
    Greenhouse,
    Bedroom,
    Attic,
    Basement,
}

#[allow(clippy::too_many_arguments)]
const fn rp(
    density: f32,
    diffusion: f32,
    gain: f32,
    hfgain: f32,
    decay_time: f32,
    hfdecay_ratio: f32,
    reflections_gain: f32,
    reflections_delay: f32,
    late_gain: f32,
    late_delay: f32,
    air_absorption_hfgain: f32,
    room_rolloff_factor: f32,
    hfdecay_limited: bool,
) -> ReverbParams {
    ReverbParams {
        density,
        diffusion,
        gain,
        hfgain,
        decay_time,
        hfdecay_ratio,
        reflections_gain,
        reflections_delay,
        late_gain,
        late_delay,
        air_absorption_hfgain,
        room_rolloff_factor,
        hfdecay_limited,
    }
}

/// Looking up a preset replaces all 13 parameters atomically.
pub fn table(preset: ReverbPreset) -> ReverbParams {
    use ReverbPreset::*;
    match preset {
        Generic => rp(1.0, 1.0, 0.32, 0.89, 1.49, 0.83, 0.05, 0.007, 1.26, 0.011, 0.994, 0.0, true),
        PaddedCell => rp(0.17, 1.0, 0.25, 0.0, 0.17, 0.1, 0.25, 0.001, 1.27, 0.002, 0.994, 0.0, true),
        Room => rp(0.40, 0.83, 0.32, 0.59, 0.40, 0.83, 0.15, 0.002, 1.06, 0.003, 0.994, 0.0, true),
        Bathroom => rp(0.05, 0.54, 0.32, 0.54, 1.49, 0.54, 0.65, 0.007, 3.16, 0.011, 0.994, 0.0, true),
        Livingroom => rp(0.58, 0.10, 0.32, 0.10, 0.50, 0.10, 0.20, 0.003, 0.90, 0.004, 0.994, 0.0, true),
        Stoneroom => rp(1.0, 0.71, 0.32, 0.71, 2.31, 0.64, 0.45, 0.012, 1.12, 0.017, 0.994, 0.0, true),
        Auditorium => rp(1.0, 0.43, 0.32, 0.59, 4.32, 0.59, 0.18, 0.020, 1.85, 0.030, 0.994, 0.0, true),
        ConcertHall => rp(1.0, 0.56, 0.32, 0.70, 3.92, 0.70, 0.15, 0.020, 2.02, 0.029, 0.994, 0.0, true),
        Cave => rp(1.0, 1.0, 0.32, 1.0, 2.91, 1.30, 0.50, 0.015, 1.90, 0.022, 1.0, 0.0, false),
        Arena => rp(1.0, 0.32, 0.32, 0.45, 7.24, 0.33, 0.26, 0.020, 1.20, 0.030, 0.994, 0.0, true),
        Hangar => rp(1.0, 0.30, 0.32, 0.23, 10.0, 0.23, 0.50, 0.020, 1.26, 0.030, 0.994, 0.0, true),
        CarpetedHallway => rp(0.40, 0.10, 0.32, 0.01, 0.30, 0.10, 0.12, 0.002, 0.88, 0.030, 0.994, 0.0, true),
        Hallway => rp(1.0, 0.59, 0.32, 0.59, 1.49, 0.59, 0.24, 0.007, 1.79, 0.011, 0.994, 0.0, true),
        StoneCorridor => rp(1.0, 0.76, 0.32, 0.83, 2.70, 0.79, 0.27, 0.013, 1.60, 0.020, 0.994, 0.0, true),
        Alley => rp(1.0, 0.30, 0.32, 0.73, 1.49, 0.86, 0.25, 0.007, 0.95, 0.011, 0.994, 0.125, true),
        Forest => rp(1.0, 0.30, 0.32, 0.022, 1.49, 0.54, 0.052, 0.162, 0.76, 0.088, 0.994, 0.125, true),
        City => rp(1.0, 0.50, 0.32, 0.50, 1.49, 0.67, 0.073, 0.007, 0.14, 0.011, 0.994, 0.0, true),
        Mountains => rp(1.0, 0.27, 0.32, 0.05, 1.49, 0.21, 0.040, 0.30, 0.17, 0.10, 1.0, 0.25, false),
        Quarry => rp(1.0, 1.0, 0.32, 0.32, 1.49, 0.83, 0.0, 0.061, 1.78, 0.025, 0.994, 0.125, true),
        Plain => rp(1.0, 0.21, 0.32, 0.10, 1.49, 0.50, 0.021, 0.18, 0.10, 0.10, 0.994, 0.25, false),
        ParkingLot => rp(1.0, 1.0, 0.32, 1.0, 1.65, 1.50, 0.20, 0.008, 1.0, 0.012, 1.0, 0.0, false),
        SewerPipe => rp(0.31, 0.80, 0.32, 0.31, 2.81, 0.14, 1.64, 0.014, 3.16, 0.021, 0.994, 0.0, true),
        Underwater => rp(0.32, 1.0, 0.32, 0.01, 1.49, 0.10, 0.60, 0.007, 7.0, 0.011, 0.994, 0.0, true),
        Drugged => rp(0.25, 0.70, 0.32, 1.0, 8.39, 1.39, 0.88, 0.002, 3.16, 0.025, 0.994, 0.0, true),
        Dizzy => rp(0.60, 0.60, 0.32, 0.81, 17.23, 0.56, 0.13, 0.020, 1.49, 0.03, 0.994, 0.0, true),
        Psychotic => rp(0.25, 0.70, 0.32, 0.99, 7.56, 0.91, 0.48, 0.020, 4.0, 0.03, 0.994, 0.0, true),

        CastleSmallRoom => rp(1.0, 0.89, 0.32, 0.32, 1.22, 0.83, 0.89, 0.022, 1.99, 0.011, 0.994, 0.0, true),
        CastleShortPassage => rp(1.0, 0.89, 0.32, 0.31, 2.32, 0.83, 0.89, 0.007, 1.12, 0.023, 0.994, 0.0, true),
        CastleMediumRoom => rp(1.0, 0.93, 0.32, 0.28, 2.04, 0.83, 0.63, 0.022, 1.30, 0.011, 0.994, 0.0, true),
        CastleLongPassage => rp(1.0, 0.89, 0.32, 0.31, 3.42, 0.83, 0.89, 0.007, 1.06, 0.023, 0.994, 0.0, true),
        CastleHall => rp(1.0, 0.81, 0.32, 0.28, 3.14, 0.79, 0.45, 0.022, 1.06, 0.011, 0.994, 0.0, true),
        CastleCupboard => rp(1.0, 0.89, 0.32, 0.29, 0.56, 0.89, 1.12, 0.006, 1.92, 0.004, 0.994, 0.0, true),
        CastleCourtyard => rp(1.0, 0.42, 0.32, 0.36, 2.13, 0.31, 0.22, 0.16, 0.39, 0.036, 0.994, 0.125, false),
        CastleAlcove => rp(1.0, 0.89, 0.32, 0.31, 1.64, 0.83, 1.12, 0.007, 1.75, 0.011, 0.994, 0.0, true),

        FactorySmallRoom => rp(0.36, 0.64, 0.32, 0.69, 1.72, 0.65, 0.70, 0.010, 1.81, 0.012, 0.994, 0.0, true),
        FactoryShortPassage => rp(0.64, 0.64, 0.32, 0.65, 2.53, 0.65, 1.18, 0.009, 1.68, 0.011, 0.994, 0.0, true),
        FactoryMediumRoom => rp(0.82, 0.65, 0.32, 0.64, 1.72, 0.65, 0.55, 0.022, 1.13, 0.023, 0.994, 0.0, true),
        FactoryLongPassage => rp(0.64, 0.65, 0.32, 0.65, 3.89, 0.65, 1.18, 0.009, 1.05, 0.023, 0.994, 0.0, true),
        FactoryHall => rp(1.0, 0.81, 0.32, 0.50, 7.43, 0.65, 0.39, 0.022, 1.39, 0.011, 0.994, 0.0, true),
        FactoryCupboard => rp(0.31, 0.65, 0.32, 0.58, 0.49, 0.65, 1.37, 0.010, 1.74, 0.012, 0.994, 0.0, true),
        FactoryCourtyard => rp(0.65, 0.29, 0.32, 0.56, 2.32, 0.29, 0.173, 0.14, 0.25, 0.021, 0.994, 0.125, false),
        FactoryAlcove => rp(1.0, 0.65, 0.32, 0.59, 3.14, 0.65, 1.75, 0.007, 1.38, 0.011, 0.994, 0.0, true),

        IcePalaceSmallRoom => rp(1.0, 0.84, 0.32, 0.53, 1.51, 1.53, 0.84, 0.010, 1.46, 0.011, 0.994, 0.0, true),
        IcePalaceShortPassage => rp(1.0, 0.75, 0.32, 0.55, 1.79, 1.46, 0.68, 0.010, 1.04, 0.019, 0.994, 0.0, true),
        IcePalaceMediumRoom => rp(1.0, 0.87, 0.32, 0.39, 2.22, 1.53, 0.68, 0.019, 1.41, 0.027, 0.994, 0.0, true),
        IcePalaceLongPassage => rp(1.0, 0.77, 0.32, 0.51, 3.01, 1.46, 0.78, 0.012, 1.06, 0.025, 0.994, 0.0, true),
        IcePalaceHall => rp(1.0, 0.76, 0.32, 0.38, 5.49, 1.53, 0.56, 0.019, 1.59, 0.028, 0.994, 0.0, true),
        IcePalaceCupboard => rp(1.0, 0.83, 0.32, 0.39, 0.76, 1.53, 1.16, 0.008, 1.98, 0.014, 0.994, 0.0, true),
        IcePalaceCourtyard => rp(1.0, 0.59, 0.32, 0.24, 2.04, 1.2, 0.29, 0.16, 0.37, 0.031, 0.994, 0.125, false),
        IcePalaceAlcove => rp(1.0, 0.84, 0.32, 0.53, 2.76, 1.46, 1.49, 0.010, 1.90, 0.011, 0.994, 0.0, true),

        SpaceStationSmallRoom => rp(0.21, 0.70, 0.32, 0.18, 1.72, 0.82, 0.43, 0.007, 1.78, 0.013, 0.994, 0.0, true),
        SpaceStationShortPassage => rp(0.87, 0.84, 0.32, 0.18, 3.57, 0.50, 0.52, 0.012, 1.15, 0.016, 0.994, 0.0, true),
        SpaceStationMediumRoom => rp(0.75, 0.70, 0.32, 0.18, 3.01, 0.50, 0.27, 0.022, 0.95, 0.035, 0.994, 0.0, true),
        SpaceStationLongPassage => rp(0.82, 0.87, 0.32, 0.21, 4.62, 0.62, 0.32, 0.012, 1.01, 0.031, 0.994, 0.0, true),
        SpaceStationHall => rp(1.0, 0.81, 0.32, 0.18, 7.11, 0.50, 0.24, 0.017, 0.84, 0.035, 0.994, 0.0, true),
        SpaceStationCupboard => rp(1.0, 0.56, 0.32, 0.18, 0.79, 0.81, 1.16, 0.006, 1.77, 0.018, 0.994, 0.0, true),
        SpaceStationAlcove => rp(1.0, 0.78, 0.32, 0.25, 1.16, 0.81, 1.49, 0.007, 1.65, 0.018, 0.994, 0.0, true),

        WoodenSmallRoom => rp(1.0, 1.0, 0.32, 0.32, 0.79, 0.32, 1.0, 0.002, 1.12, 0.006, 0.994, 0.0, false),
        WoodenShortPassage => rp(1.0, 1.0, 0.32, 0.32, 1.75, 0.50, 0.69, 0.007, 0.87, 0.012, 0.994, 0.0, false),
        WoodenMediumRoom => rp(1.0, 1.0, 0.32, 0.32, 1.47, 0.42, 0.42, 0.011, 0.82, 0.019, 0.994, 0.0, false),
        WoodenLongPassage => rp(1.0, 1.0, 0.32, 0.32, 2.65, 0.50, 0.64, 0.011, 0.62, 0.023, 0.994, 0.0, false),
        WoodenHall => rp(1.0, 1.0, 0.32, 0.32, 3.45, 0.42, 0.30, 0.011, 0.50, 0.019, 0.994, 0.0, false),
        WoodenCupboard => rp(1.0, 1.0, 0.32, 0.32, 0.56, 0.32, 0.46, 0.006, 0.91, 0.012, 0.994, 0.0, false),
        WoodenCourtyard => rp(1.0, 0.65, 0.32, 0.32, 1.79, 0.35, 0.066, 0.15, 0.35, 0.031, 0.994, 0.125, false),
        WoodenAlcove => rp(1.0, 1.0, 0.32, 0.32, 1.22, 0.62, 0.62, 0.012, 0.79, 0.021, 0.994, 0.0, false),

        SportEmptyStadium => rp(1.0, 1.0, 0.32, 1.0, 6.26, 0.51, 0.062, 0.183, 0.23, 0.038, 0.994, 0.0, true),
        SportSquashCourt => rp(1.0, 0.75, 0.32, 0.75, 2.22, 0.91, 0.44, 0.011, 1.16, 0.016, 0.994, 0.126, true),
        SportSmallSwimmingPool => rp(0.70, 0.80, 0.32, 0.70, 2.76, 1.12, 0.61, 0.020, 1.15, 0.030, 0.994, 0.0, false),
        SportLargeSwimmingPool => rp(0.82, 1.0, 0.32, 0.82, 5.49, 1.31, 0.47, 0.039, 1.0, 0.052, 0.994, 0.0, false),
        SportGymnasium => rp(1.0, 0.81, 0.32, 0.80, 3.14, 1.06, 0.40, 0.016, 1.25, 0.022, 0.994, 0.0, true),
        SportFullStadium => rp(1.0, 1.0, 0.32, 0.70, 5.25, 0.17, 0.019, 0.188, 0.088, 0.038, 0.994, 0.0, true),
        SportStadiumTannoy => rp(1.0, 0.78, 0.32, 0.70, 2.53, 0.88, 0.23, 0.023, 0.50, 0.025, 0.994, 0.0, true),

        PrefabWorkshop => rp(0.36, 0.1, 0.32, 0.10, 0.76, 1.0, 1.0, 0.012, 1.12, 0.006, 0.994, 0.0, true),
        PrefabSchoolRoom => rp(0.40, 0.17, 0.32, 0.43, 0.98, 0.45, 1.41, 0.017, 1.46, 0.010, 0.994, 0.0, true),
        PrefabPractiseRoom => rp(0.40, 0.17, 0.32, 0.27, 1.12, 0.56, 1.41, 0.010, 1.94, 0.012, 0.994, 0.0, true),
        PrefabOuthouse => rp(1.0, 0.36, 0.32, 0.10, 1.38, 0.20, 0.88, 0.013, 0.68, 0.022, 0.994, 0.0, false),
        PrefabCaravan => rp(1.0, 1.0, 0.32, 1.0, 0.43, 1.20, 1.38, 0.006, 1.39, 0.012, 0.994, 0.0, true),

        DomeTomb => rp(1.0, 0.79, 0.32, 0.33, 4.18, 0.39, 0.38, 0.019, 1.41, 0.011, 0.994, 0.0, true),
        DomeSaintPauls => rp(1.0, 0.87, 0.32, 0.39, 10.48, 0.19, 0.18, 0.019, 0.10, 0.013, 0.994, 0.0, true),

        PipeSmall => rp(1.0, 1.0, 0.32, 1.0, 5.04, 0.10, 1.26, 0.020, 1.53, 0.035, 0.994, 0.0, true),
        PipeLongThin => rp(0.25, 1.0, 0.32, 0.91, 9.21, 0.18, 0.41, 0.046, 1.39, 0.090, 0.994, 0.0, true),
        PipeLarge => rp(1.0, 1.0, 0.32, 1.0, 8.45, 0.10, 0.39, 0.046, 1.58, 0.090, 0.994, 0.0, true),
        PipeResonant => rp(0.13, 1.0, 0.32, 0.91, 6.81, 0.18, 0.45, 0.046, 1.23, 0.090, 0.994, 0.0, true),

        OutdoorsBackyard => rp(1.0, 0.45, 0.32, 0.25, 1.12, 0.34, 0.21, 0.069, 0.28, 0.023, 0.994, 0.125, false),
        OutdoorsRollingPlains => rp(1.0, 0.0, 0.32, 0.01, 2.13, 0.10, 0.034, 0.30, 0.19, 0.019, 0.994, 0.0, false),
        OutdoorsDeepCanyon => rp(1.0, 0.74, 0.32, 0.18, 3.89, 0.21, 0.34, 0.223, 0.27, 0.019, 0.994, 0.125, false),
        OutdoorsCreek => rp(1.0, 0.35, 0.32, 0.21, 2.13, 0.35, 0.048, 0.115, 0.15, 0.031, 0.994, 0.0, false),
        OutdoorsValley => rp(1.0, 0.28, 0.32, 0.02, 2.88, 0.26, 0.26, 0.263, 0.10, 0.100, 0.994, 0.125, false),

        MoodHeaven => rp(1.0, 0.94, 0.32, 0.28, 5.04, 0.87, 0.24, 0.020, 1.17, 0.029, 0.994, 0.0, true),
        MoodHell => rp(1.0, 0.57, 0.32, 0.68, 3.57, 0.49, 0.0, 0.020, 1.41, 0.030, 0.994, 0.0, true),
        MoodMemory => rp(0.85, 0.63, 0.32, 0.67, 4.06, 0.82, 0.0, 0.0, 0.98, 0.0, 0.994, 0.0, true),

        DrivingCommentator => rp(1.0, 0.0, 0.32, 0.56, 2.42, 0.88, 0.19, 0.0, 0.25, 0.0, 0.994, 0.0, true),
        DrivingPitGarage => rp(0.59, 0.70, 0.32, 0.56, 1.72, 0.93, 0.56, 0.0, 1.04, 0.0, 0.994, 0.0, true),
        DrivingIncarRacer => rp(1.0, 0.0, 0.32, 1.0, 0.17, 2.0, 1.77, 0.0, 0.71, 0.0, 0.994, 0.0, true),
        DrivingIncarSports => rp(1.0, 0.0, 0.32, 0.65, 0.11, 1.0, 0.56, 0.0, 0.89, 0.0, 0.994, 0.0, true),
        DrivingIncarLuxury => rp(1.0, 0.10, 0.32, 0.10, 0.29, 1.0, 0.16, 0.0, 0.49, 0.010, 0.994, 0.0, true),
        DrivingFullGrandstand => rp(1.0, 1.0, 0.32, 0.56, 3.01, 1.15, 0.28, 0.090, 0.19, 0.049, 0.994, 0.0, true),
        DrivingEmptyGrandstand => rp(1.0, 1.0, 0.32, 0.50, 4.62, 1.30, 0.32, 0.090, 0.19, 0.049, 0.994, 0.0, true),
        DrivingTunnel => rp(1.0, 0.81, 0.32, 0.66, 3.42, 0.79, 0.56, 0.051, 1.31, 0.114, 0.994, 0.0, true),

        CityStreets => rp(1.0, 0.78, 0.32, 0.71, 1.79, 1.12, 0.20, 0.020, 0.25, 0.030, 0.994, 0.0, true),
        CitySubway => rp(1.0, 0.74, 0.32, 0.70, 3.01, 1.23, 0.66, 0.023, 1.03, 0.011, 0.994, 0.0, true),
        CityMuseum => rp(1.0, 0.82, 0.32, 0.17, 3.28, 1.40, 0.16, 0.039, 0.70, 0.034, 0.994, 0.0, false),
        CityLibrary => rp(1.0, 0.83, 0.32, 0.12, 2.76, 0.89, 0.17, 0.029, 0.45, 0.020, 0.994, 0.0, false),
        CityUnderpass => rp(1.0, 0.82, 0.32, 0.42, 3.57, 1.12, 0.29, 0.020, 0.99, 0.030, 0.994, 0.0, true),
        CityAbandoned => rp(1.0, 0.69, 0.32, 0.57, 3.28, 1.17, 0.44, 0.020, 0.24, 0.030, 0.994, 0.0, true),

        DustyRoom => rp(0.75, 0.60, 0.32, 0.48, 1.79, 0.38, 0.37, 0.020, 1.29, 0.030, 0.994, 0.0, true),
        Chapel => rp(1.0, 0.84, 0.32, 0.62, 4.62, 0.64, 0.32, 0.032, 1.49, 0.049, 0.994, 0.0, true),
        SmallWaterRoom => rp(1.0, 0.70, 0.32, 0.42, 1.51, 1.25, 0.84, 0.020, 1.40, 0.030, 0.994, 0.0, false),
        Courtroom => rp(1.0, 0.60, 0.32, 0.33, 1.35, 0.40, 0.35, 0.015, 0.70, 0.020, 0.994, 0.0, true),
        Greenhouse => rp(0.60, 0.50, 0.32, 0.25, 1.60, 0.40, 0.30, 0.020, 0.60, 0.025, 0.994, 0.0, false),
        Bedroom => rp(0.55, 0.30, 0.32, 0.15, 0.65, 0.30, 0.18, 0.005, 0.80, 0.008, 0.994, 0.0, true),
        Attic => rp(0.70, 0.55, 0.32, 0.40, 1.10, 0.50, 0.40, 0.010, 1.00, 0.015, 0.994, 0.0, true),
        Basement => rp(0.85, 0.65, 0.32, 0.30, 1.90, 0.45, 0.55, 0.018, 1.10, 0.022, 0.994, 0.0, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_produces_in_range_params() {
        let all = [
            ReverbPreset::Generic,
            ReverbPreset::Underwater,
            ReverbPreset::CastleHall,
            ReverbPreset::SportFullStadium,
            ReverbPreset::DrivingTunnel,
            ReverbPreset::CityAbandoned,
            ReverbPreset::Basement,
        ];
        for preset in all {
            let p = table(preset);
            assert!((0.0..=1.0).contains(&p.density));
            assert!((0.1..=20.0).contains(&p.decay_time));
        }
    }

    #[test]
    fn preset_lookup_is_total_and_stable() {
        assert_eq!(table(ReverbPreset::Generic), table(ReverbPreset::Generic));
    }
}
