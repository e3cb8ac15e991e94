use crate::airport::Airport;
use crate::time::Time;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Tail registration, normalised to upper case so that equality is case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Registration(Arc<str>);

impl Registration {
    pub fn new(registration: &str) -> Registration {
        Registration(Arc::from(registration.trim().to_ascii_uppercase()))
    }

    pub fn matches(&self, registration: &str) -> bool {
        self.0.eq_ignore_ascii_case(registration.trim())
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Manufacturer {
    Airbus,
    Boeing,
    Embraer,
    Bombardier,
    Atr,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("aircraft model '{0}' is not in the manufacturer table")]
pub struct UnknownModel(pub String);

impl Manufacturer {
    const MODELS: &'static [(&'static str, Manufacturer)] = &[
        ("A220", Manufacturer::Airbus),
        ("A300", Manufacturer::Airbus),
        ("A310", Manufacturer::Airbus),
        ("A318", Manufacturer::Airbus),
        ("A319", Manufacturer::Airbus),
        ("A320", Manufacturer::Airbus),
        ("A321", Manufacturer::Airbus),
        ("A330", Manufacturer::Airbus),
        ("A340", Manufacturer::Airbus),
        ("A350", Manufacturer::Airbus),
        ("A380", Manufacturer::Airbus),
        ("717", Manufacturer::Boeing),
        ("727", Manufacturer::Boeing),
        ("737", Manufacturer::Boeing),
        ("747", Manufacturer::Boeing),
        ("757", Manufacturer::Boeing),
        ("767", Manufacturer::Boeing),
        ("777", Manufacturer::Boeing),
        ("787", Manufacturer::Boeing),
        ("E170", Manufacturer::Embraer),
        ("E175", Manufacturer::Embraer),
        ("E190", Manufacturer::Embraer),
        ("E195", Manufacturer::Embraer),
        ("CRJ700", Manufacturer::Bombardier),
        ("CRJ900", Manufacturer::Bombardier),
        ("CRJ1000", Manufacturer::Bombardier),
        ("DASH8", Manufacturer::Bombardier),
        ("ATR42", Manufacturer::Atr),
        ("ATR72", Manufacturer::Atr),
    ];

    /// Looks the model up by exact name first, then by its family (the part before the first `-`).
    pub fn classify(model: &str) -> Result<Manufacturer, UnknownModel> {
        let model = model.trim();
        let lookup = |name: &str| {
            Self::MODELS
                .iter()
                .find(|(m, _)| m.eq_ignore_ascii_case(name))
                .map(|(_, manufacturer)| *manufacturer)
        };
        lookup(model)
            .or_else(|| model.split_once('-').and_then(|(family, _)| lookup(family)))
            .ok_or_else(|| UnknownModel(model.to_string()))
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Manufacturer::Airbus => "Airbus",
            Manufacturer::Boeing => "Boeing",
            Manufacturer::Embraer => "Embraer",
            Manufacturer::Bombardier => "Bombardier",
            Manufacturer::Atr => "ATR",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Aircraft {
    pub registration: Registration,
    pub model: String,
    pub manufacturer: Manufacturer,
}

impl Aircraft {
    pub fn new(registration: &str, model: &str) -> Result<Aircraft, UnknownModel> {
        let manufacturer = Manufacturer::classify(model)?;
        Ok(Aircraft::with_manufacturer(registration, model, manufacturer))
    }

    pub fn with_manufacturer(
        registration: &str,
        model: &str,
        manufacturer: Manufacturer,
    ) -> Aircraft {
        Aircraft {
            registration: Registration::new(registration),
            model: model.trim().to_string(),
            manufacturer,
        }
    }
}

impl PartialEq for Aircraft {
    fn eq(&self, other: &Self) -> bool {
        self.registration == other.registration
    }
}

impl Eq for Aircraft {}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration, self.model)
    }
}

/// Where an aircraft is and from when it can depart again.
///
/// `ready_at` stays `None` until the search pins it to the first departure window the aircraft
/// takes part in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AircraftLocation {
    pub aircraft: Arc<Aircraft>,
    pub airport: Airport,
    pub ready_at: Option<Time>,
}

impl AircraftLocation {
    pub fn home_base(aircraft: Aircraft, airport: Airport) -> AircraftLocation {
        AircraftLocation {
            aircraft: Arc::new(aircraft),
            airport,
            ready_at: None,
        }
    }

    pub fn is_ready_by(&self, time: Time) -> bool {
        self.ready_at.is_none_or(|ready| ready <= time)
    }
}

impl fmt::Display for AircraftLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.aircraft, self.airport)?;
        if let Some(ready) = self.ready_at {
            write!(f, " from {}", ready)?;
        }
        Ok(())
    }
}
