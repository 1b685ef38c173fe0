//! Static report data standing in for a real dependency resolution pass

use crate::domain::scan::{Dependency, DependencyReport, DependencyType};

/// Build the fixed dependency report returned by every scan.
///
/// Pure and transport-independent; callers decide how (and how slowly) to
/// serve it.
pub fn mock_report() -> DependencyReport {
    let mut report = DependencyReport::new();

    report.insert(
        "org.springframework.boot:spring-boot-starter-data-jpa",
        Dependency {
            version: "2.5.4".to_string(),
            dep_type: DependencyType::Direct,
            vulnerable: false,
            recommendation: "Consider upgrading to the latest version for performance improvements."
                .to_string(),
        },
    );

    report.insert(
        "com.fasterxml.jackson.datatype:jackson-datatype-jsr310",
        Dependency {
            version: "2.12.3".to_string(),
            dep_type: DependencyType::Direct,
            vulnerable: true,
            recommendation:
                "Urgent: Upgrade to version 2.12.6.1 or later to address critical vulnerabilities."
                    .to_string(),
        },
    );

    report.insert(
        "org.apache.logging.log4j:log4j-core",
        Dependency {
            version: "2.14.1".to_string(),
            dep_type: DependencyType::Transitive,
            vulnerable: true,
            recommendation: "Critical: Upgrade to version 2.15.0 or later immediately to address security vulnerabilities."
                .to_string(),
        },
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_contains_exactly_the_three_known_coordinates() {
        let report = mock_report();

        assert_eq!(report.len(), 3);
        assert!(
            report
                .get("org.springframework.boot:spring-boot-starter-data-jpa")
                .is_some()
        );
        assert!(
            report
                .get("com.fasterxml.jackson.datatype:jackson-datatype-jsr310")
                .is_some()
        );
        assert!(report.get("org.apache.logging.log4j:log4j-core").is_some());
    }

    #[test]
    fn vulnerability_flags_match_the_known_data() {
        let report = mock_report();

        let jpa = report
            .get("org.springframework.boot:spring-boot-starter-data-jpa")
            .unwrap();
        assert!(!jpa.vulnerable);
        assert_eq!(jpa.dep_type, DependencyType::Direct);
        assert_eq!(jpa.version, "2.5.4");

        let jackson = report
            .get("com.fasterxml.jackson.datatype:jackson-datatype-jsr310")
            .unwrap();
        assert!(jackson.vulnerable);
        assert_eq!(jackson.dep_type, DependencyType::Direct);

        let log4j = report.get("org.apache.logging.log4j:log4j-core").unwrap();
        assert!(log4j.vulnerable);
        assert_eq!(log4j.dep_type, DependencyType::Transitive);
        assert_eq!(log4j.version, "2.14.1");
    }

    #[test]
    fn report_is_deterministic() {
        assert_eq!(mock_report(), mock_report());
    }
}
