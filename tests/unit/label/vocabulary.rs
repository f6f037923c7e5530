//! Tests for shape and relation words

#[cfg(test)]
mod tests {
    use shapegen::GeneratorError;
    use shapegen::label::{Relation, ShapeKind, Vocabulary};
    use shapegen::syntax::{AtomicEntity, Transformer};

    // Tests shape words parse and print symmetrically
    // Verified by misspelling a shape name
    #[test]
    fn test_shape_kind_words() -> Result<(), GeneratorError> {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>()?, kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        Ok(())
    }

    // Tests unknown words carry their category
    // Verified by reporting the relation category for shapes
    #[test]
    fn test_unknown_words() {
        match "hexagon".parse::<ShapeKind>() {
            Err(GeneratorError::UnknownWord { category, word }) => {
                assert_eq!(category, "shape");
                assert_eq!(word, "hexagon");
            }
            other => panic!("expected UnknownWord, got {other:?}"),
        }
        assert!(matches!(
            "above".parse::<Relation>(),
            Err(GeneratorError::UnknownWord {
                category: "relation",
                ..
            })
        ));
    }

    // Tests only containment restricts its object
    // Verified by restricting every relation
    #[test]
    fn test_relation_restricts_object() {
        assert!(Relation::InsideOf.restricts_object());
        assert!(!Relation::LeftOf.restricts_object());
        assert_eq!(Relation::InsideOf.name(), "inside_of");
        assert_eq!(Relation::LeftOf.to_string(), "left_of");
    }

    // Tests the standard vocabulary lists every word in order
    // Verified by omitting the triangle
    #[test]
    fn test_standard_vocabulary() {
        let vocabulary = Vocabulary::standard();
        let shapes: Vec<&str> = vocabulary.shapes().iter().map(AtomicEntity::name).collect();
        let relations: Vec<&str> = vocabulary
            .relations()
            .iter()
            .map(Transformer::name)
            .collect();

        assert_eq!(shapes, ["circle", "square", "triangle"]);
        assert_eq!(relations, ["inside_of", "left_of"]);
        assert_eq!(Vocabulary::default(), vocabulary);
    }

    // Tests restriction lookup by transformer word
    // Verified by matching on transformer position instead of name
    #[test]
    fn test_vocabulary_restricts_object() {
        let vocabulary = Vocabulary::standard();

        assert!(vocabulary.restricts_object(&Transformer::relation("inside_of")));
        assert!(!vocabulary.restricts_object(&Transformer::relation("left_of")));
        assert!(!vocabulary.restricts_object(&Transformer::relation("near")));
    }

    // Tests empty word lists are refused
    // Verified by accepting empty lists
    #[test]
    fn test_vocabulary_new_rejects_empty() {
        assert!(Vocabulary::new(Vec::new(), vec![Transformer::relation("left_of")]).is_err());
        assert!(Vocabulary::new(vec![AtomicEntity::new("circle")], Vec::new()).is_err());
        assert!(
            Vocabulary::new(
                vec![AtomicEntity::new("circle")],
                vec![Transformer::relation("left_of")]
            )
            .is_ok()
        );
    }

    // Tests only words with a drawing rule pass the drawable check
    // Verified by skipping the relation words
    #[test]
    fn test_ensure_drawable() -> Result<(), GeneratorError> {
        assert!(Vocabulary::standard().ensure_drawable().is_ok());

        let shapes = Vocabulary::new(
            vec![AtomicEntity::new("circle"), AtomicEntity::new("hexagon")],
            vec![Transformer::relation("left_of")],
        )?;
        assert!(matches!(
            shapes.ensure_drawable(),
            Err(GeneratorError::UnknownWord { category: "shape", .. })
        ));

        let relations = Vocabulary::new(
            vec![AtomicEntity::new("square")],
            vec![Transformer::relation("near")],
        )?;
        assert!(matches!(
            relations.ensure_drawable(),
            Err(GeneratorError::UnknownWord { category: "relation", .. })
        ));
        Ok(())
    }
}
