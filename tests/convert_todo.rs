#[cfg(test)]
mod tests {
    use todo2org::libs::outline::convert_to_org;
    use todo2org::libs::reverse::{convert_document_to_todo, convert_to_todo};

    fn round_trip(line: &str) -> String {
        let org = convert_to_org(&[line]);
        let lines: Vec<&str> = org.split('\n').collect();
        convert_to_todo(&lines)
    }

    #[test]
    fn test_round_trip_scenarios() {
        let lines = [
            "Take dog for a walk",
            "(B) Take dog for a walk",
            "x Take dog for a walk",
            "Take dog for a walk +MrWiggles",
            "2018-12-12 2018-12-10 Take dog for a walk",
            "Take dog for a walk due:2018-12-12",
        ];
        for line in lines {
            assert_eq!(round_trip(line), line);
        }
    }

    #[test]
    fn test_round_trip_with_contexts_and_dates() {
        let lines = [
            "Take dog for a walk @home @park",
            "2018-12-10 Take dog for a walk",
            "x 2018-12-12 Take dog for a walk",
            "x (A) 2018-12-12 2018-12-10 Take dog for a walk +Pets @park due:2018-12-14",
        ];
        for line in lines {
            assert_eq!(round_trip(line), line);
        }
    }

    #[test]
    fn test_multiple_projects_collapse_to_group() {
        assert_eq!(
            round_trip("Take dog for a walk +MrWiggles +Pets"),
            "Take dog for a walk +MrWiggles"
        );
    }

    #[test]
    fn test_round_trip_reorders_tags() {
        assert_eq!(
            round_trip("@park Take dog +Pets for a walk"),
            "Take dog for a walk +Pets @park"
        );
    }

    #[test]
    fn test_block_without_group_heading() {
        let lines = ["** TODO [#C] Call mom :phone:", "[2018-12-10]"];
        assert_eq!(convert_to_todo(&lines), "(C) 2018-12-10 Call mom @phone");
    }

    #[test]
    fn test_only_first_task_is_returned() {
        let lines = ["* Tasks", "** TODO One", "** DONE Two"];
        assert_eq!(convert_to_todo(&lines), "One");
    }

    #[test]
    fn test_no_task_heading_yields_empty_line() {
        let lines = ["* Tasks", "[2018-12-10]"];
        assert_eq!(convert_to_todo(&lines), "");
        let empty: [&str; 0] = [];
        assert_eq!(convert_to_todo(&empty), "");
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(round_trip(""), "");
        assert_eq!(round_trip("x"), "x");
    }

    #[test]
    fn test_invalid_planning_lines_are_ignored() {
        let lines = [
            "* Tasks",
            "** TODO Walk",
            "CLOSED: [someday]",
            "DEADLINE: <2018-02-30>",
            "Notes about the walk",
        ];
        assert_eq!(convert_to_todo(&lines), "Walk");
    }

    #[test]
    fn test_document_to_todo() {
        let todo_lines = [
            "Feed cat +Pets @home",
            "Buy milk",
            "x 2018-12-12 Walk dog +Pets",
            "(A) Fix bike +Garage due:2018-12-20",
        ];
        let org = convert_to_org(&todo_lines);
        let lines: Vec<&str> = org.lines().collect();

        assert_eq!(
            convert_document_to_todo(&lines),
            vec![
                "Feed cat +Pets @home".to_string(),
                "x 2018-12-12 Walk dog +Pets".to_string(),
                "Buy milk".to_string(),
                "(A) Fix bike +Garage due:2018-12-20".to_string(),
            ]
        );
    }

    #[test]
    fn test_document_tolerates_trailing_whitespace() {
        let lines = ["* Pets  ", "** DONE Walk dog :park:  ", "CLOSED: [2018-12-12]  "];
        assert_eq!(
            convert_document_to_todo(&lines),
            vec!["x 2018-12-12 Walk dog +Pets @park".to_string()]
        );
    }
}
