//! Tests for recursive random phrase generation

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use shapegen::GeneratorError;
    use shapegen::io::configuration::{
        DEFAULT_COMPLEXITY, DEFAULT_MAX_DEPTH, OPERAND_COMPLEXITY, OPERAND_MAX_DEPTH,
    };
    use shapegen::label::{LabelConfig, LabelGenerator, ShapeKind, Vocabulary};
    use shapegen::syntax::{AtomicEntity, Entity, Linearize, Transformer};

    fn assert_well_formed(entity: &Entity, vocabulary: &Vocabulary) {
        match entity {
            Entity::Atomic(atom) => {
                assert!(atom.name().parse::<ShapeKind>().is_ok());
            }
            Entity::Descripted(described) => {
                let transformed = described
                    .descriptor()
                    .as_transformed()
                    .unwrap_or_else(|| panic!("relation expected in {entity}"));
                if vocabulary.restricts_object(transformed.transformer()) {
                    assert!(transformed.object().is_atomic(), "{entity}");
                }
                assert_well_formed(transformed.object(), vocabulary);
                assert_well_formed(described.entity(), vocabulary);
            }
            Entity::Composite(_) => panic!("generator never joins entities"),
        }
    }

    // Tests defaults come from configuration constants
    // Verified by swapping subject and operand budgets
    #[test]
    fn test_label_config_default() {
        let config = LabelConfig::default();

        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!((config.complexity - DEFAULT_COMPLEXITY).abs() < f64::EPSILON);
        assert_eq!(config.operand_max_depth, OPERAND_MAX_DEPTH);
        assert!((config.operand_complexity - OPERAND_COMPLEXITY).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    // Tests probabilities outside [0, 1] are refused
    // Verified by removing the range check
    #[test]
    fn test_label_config_validate() {
        let config = LabelConfig {
            complexity: 1.5,
            ..LabelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidParameter {
                parameter: "complexity",
                ..
            })
        ));

        let config = LabelConfig {
            operand_complexity: -0.1,
            ..LabelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    // Tests zero depth always yields a single shape word
    // Verified by drawing before the depth check
    #[test]
    fn test_depth_zero_is_atomic() -> Result<(), GeneratorError> {
        let vocabulary = Vocabulary::standard();
        let generator = LabelGenerator::new(&vocabulary, LabelConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let entity = generator.generate_with(&mut rng, 0, 1.0, false)?;
            assert!(entity.is_atomic());
        }
        Ok(())
    }

    // Tests zero complexity never expands
    // Verified by comparing with >= instead of >
    #[test]
    fn test_zero_complexity_is_atomic() -> Result<(), GeneratorError> {
        let vocabulary = Vocabulary::standard();
        let config = LabelConfig {
            complexity: 0.0,
            ..LabelConfig::default()
        };
        let generator = LabelGenerator::new(&vocabulary, config);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            assert_eq!(generator.generate(&mut rng)?.depth(), 0);
        }
        Ok(())
    }

    // Tests full complexity reaches exactly the depth budget
    // Verified by spending depth on the object recursion
    #[test]
    fn test_full_complexity_reaches_max_depth() -> Result<(), GeneratorError> {
        let vocabulary = Vocabulary::standard();
        let config = LabelConfig {
            max_depth: 3,
            complexity: 1.0,
            operand_max_depth: 0,
            operand_complexity: 0.0,
        };
        let generator = LabelGenerator::new(&vocabulary, config);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let entity = generator.generate(&mut rng)?;
            assert_eq!(entity.depth(), 3);
            assert_eq!(entity.leaf_count(), 4);
        }
        Ok(())
    }

    // Tests containment objects are always single words
    // Verified by ignoring the restrict flag
    #[test]
    fn test_generated_phrases_well_formed() -> Result<(), GeneratorError> {
        let vocabulary = Vocabulary::standard();
        let config = LabelConfig {
            complexity: 0.9,
            operand_complexity: 0.9,
            ..LabelConfig::default()
        };
        let generator = LabelGenerator::new(&vocabulary, config);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let entity = generator.generate(&mut rng)?;
            assert!(entity.depth() <= config.max_depth + config.operand_max_depth);
            assert_well_formed(&entity, &vocabulary);
        }
        Ok(())
    }

    // Tests the same seed yields the same phrase sequence
    // Verified by seeding from entropy
    #[test]
    fn test_seeded_generation_reproducible() -> Result<(), GeneratorError> {
        let vocabulary = Vocabulary::standard();
        let generator = LabelGenerator::new(&vocabulary, LabelConfig::default());
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(
                generator.generate(&mut first)?.linearize(),
                generator.generate(&mut second)?.linearize()
            );
        }
        Ok(())
    }

    // Tests a custom vocabulary limits the words used
    // Verified by falling back to the standard vocabulary
    #[test]
    fn test_custom_vocabulary() -> Result<(), GeneratorError> {
        let vocabulary = Vocabulary::new(
            vec![AtomicEntity::new("square")],
            vec![Transformer::relation("left_of")],
        )?;
        let config = LabelConfig {
            max_depth: 2,
            complexity: 1.0,
            ..LabelConfig::default()
        };
        let generator = LabelGenerator::new(&vocabulary, config);
        let mut rng = StdRng::seed_from_u64(9);

        let entity = generator.generate(&mut rng)?;
        assert!(
            entity
                .tokens()
                .iter()
                .all(|token| *token == "square" || *token == "left_of")
        );
        assert_eq!(generator.config().max_depth, 2);
        Ok(())
    }
}
