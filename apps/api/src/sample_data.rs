//! Static fixtures for UI development without a running backend.

use std::collections::BTreeMap;

use crate::models::{Erfahrung, Klient, Mitarbeiter, Prioritaet, Recommendation};

pub fn mitarbeiter() -> Mitarbeiter {
    Mitarbeiter {
        id: "1".into(),
        name: "Niklas Hartmann".into(),
        verfuegbar_bis: "21. März".into(),
        zeitfenster: Some("bis 13 Uhr".into()),
        qualifikationen: Some(vec!["Pflege", "Diabetes"].into()),
        klient_erfahrung: Some(vec![
            Erfahrung::new("Julia Schmid", 6.0),
            Erfahrung::new("Jonas Huber", 11.0),
        ]),
        schule_erfahrung: Some(vec![
            Erfahrung::new("Meier-Schule", 4.0),
            Erfahrung::new("Müller-Schule", 14.0),
        ]),
        schulen: Some(BTreeMap::from([
            ("Meier-Schule".to_string(), 23.0),
            ("Müller-Schule".to_string(), 35.0),
        ])),
        ..Default::default()
    }
}

fn klient_fixture(
    id: &str,
    name: &str,
    nicht_vertreten_bis: &str,
    anwesenheit: &str,
    qualifikationen: Vec<&str>,
    schule: &str,
    prioritaet: Prioritaet,
) -> Klient {
    Klient {
        id: id.into(),
        name: name.into(),
        nicht_vertreten_bis: Some(nicht_vertreten_bis.into()),
        anwesenheit: Some(anwesenheit.into()),
        qualifikationen: Some(qualifikationen.into()),
        schule: Some(schule.into()),
        prioritaet: Some(prioritaet),
        ..Default::default()
    }
}

pub fn klient() -> Klient {
    klient_fixture(
        "1",
        "Sarah Meier",
        "25. März",
        "7:40 bis 12:55 Uhr",
        vec![],
        "Müller-Schule",
        Prioritaet::Hoch,
    )
}

pub fn alternative_klienten() -> Vec<Klient> {
    vec![
        klient_fixture(
            "2",
            "Julia Schmid",
            "22. März",
            "8:00 bis 12:00 Uhr",
            vec!["Pflege"],
            "Meier-Schule",
            Prioritaet::Mittel,
        ),
        klient_fixture(
            "3",
            "Jonas Huber",
            "23. März",
            "9:15 bis 13:00 Uhr",
            vec!["Diabetes", "Erste Hilfe"],
            "Müller-Schule",
            Prioritaet::Niedrig,
        ),
        klient_fixture(
            "4",
            "Jakob Maier",
            "24. März",
            "7:45 bis 12:30 Uhr",
            vec!["Pflege", "Mobilitätstraining"],
            "Meier-Schule",
            Prioritaet::Mittel,
        ),
    ]
}

pub fn recommendations() -> Vec<Recommendation> {
    let recommendation = Recommendation {
        mitarbeiter: mitarbeiter(),
        klient: klient(),
        alternative_klienten: Some(alternative_klienten()),
    };
    vec![recommendation.clone(), recommendation]
}
