use crate::model::{default_skills, Candidate, CurrentRole, LeaderRecord, PLACEHOLDER_IMAGE_URL, UNKNOWN};

/// Build a schema-complete record from an accepted candidate. Values the
/// candidate carries are kept verbatim; everything else gets its default.
pub fn enrich(id: String, candidate: Candidate) -> LeaderRecord {
    let Candidate {
        name,
        title,
        company,
        origin: _,
    } = candidate;

    LeaderRecord {
        id,
        name,
        region: UNKNOWN.to_string(),
        current_role: CurrentRole {
            title: title.unwrap_or_else(|| UNKNOWN.to_string()),
            company: company.unwrap_or_else(|| UNKNOWN.to_string()),
        },
        skills: default_skills(),
        latest_activity: Vec::new(),
        profile_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::normalize;
    use crate::model::CandidateOrigin;

    #[test]
    fn fills_defaults() {
        let c = Candidate {
            name: "John Smith".into(),
            title: None,
            company: None,
            origin: CandidateOrigin::Search {
                query: "q".into(),
                url: "u".into(),
            },
        };
        let r = enrich(normalize(&c.name), c);
        assert_eq!(r.id, "john-smith");
        assert_eq!(r.region, "Unknown");
        assert_eq!(r.current_role.title, "Unknown");
        assert_eq!(r.current_role.company, "Unknown");
        assert_eq!(r.skills, vec!["GenAI"]);
        assert!(r.latest_activity.is_empty());
        assert_eq!(r.profile_image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn keeps_supplied_values() {
        let c = Candidate {
            name: "Jane Doe".into(),
            title: Some("CTO".into()),
            company: Some("Acme".into()),
            origin: CandidateOrigin::Seed { line: 2 },
        };
        let r = enrich("jane-doe".into(), c);
        assert_eq!(r.name, "Jane Doe");
        assert_eq!(r.current_role.title, "CTO");
        assert_eq!(r.current_role.company, "Acme");
    }

    #[test]
    fn every_field_serialized() {
        let c = Candidate {
            name: "Jane Doe".into(),
            title: None,
            company: Some("Acme".into()),
            origin: CandidateOrigin::Seed { line: 2 },
        };
        let v = serde_json::to_value(enrich("jane-doe".into(), c)).unwrap();
        let obj = v.as_object().unwrap();
        for field in [
            "id",
            "name",
            "region",
            "current_role",
            "skills",
            "latest_activity",
            "profile_image_url",
        ] {
            assert!(obj.contains_key(field), "missing {field}");
        }
        assert!(v["skills"].is_array());
        assert!(v["latest_activity"].is_array());
        assert!(v["current_role"]["title"].is_string());
    }
}
