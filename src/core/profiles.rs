use crate::models::{ContentType, CourseFlag, ModuleLengthBand, Neurotype, NeurotypeProfile};

/// Fixed lookup from neurotype to its scoring preferences
///
/// Built once at startup and never mutated. Every `Neurotype` has exactly
/// one entry, so lookups cannot miss.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: [NeurotypeProfile; 6],
}

impl ProfileTable {
    /// The standard profile for each supported neurotype
    pub fn standard() -> Self {
        use ContentType::{Interactive, Mixed, Text, Video};
        use CourseFlag::{
            HasCaption, HasDyslexiaFont, HasProgressTracking, HasStructuredLayout, HasTranscript,
            IsGamified, IsSelfPaced,
        };

        let profiles = [
            profile(
                Neurotype::Adhd,
                ModuleLengthBand::new(5, 20),
                &[Video, Interactive, Mixed],
                &[IsGamified, HasProgressTracking, IsSelfPaced],
                "Shorter, engaging modules with gamification and progress tracking",
            ),
            profile(
                Neurotype::Dyslexia,
                ModuleLengthBand::new(10, 30),
                &[Video, Interactive],
                &[HasCaption, HasTranscript, HasDyslexiaFont, HasStructuredLayout],
                "Strong visual and audio support with readable fonts",
            ),
            profile(
                Neurotype::Autism,
                ModuleLengthBand::new(15, 35),
                &[Text, Video, Mixed],
                &[HasStructuredLayout, IsSelfPaced],
                "Predictable structure with clear objectives and minimal distractions",
            ),
            profile(
                Neurotype::AuditoryProcessingDisorder,
                ModuleLengthBand::new(10, 25),
                &[Text, Interactive],
                &[HasCaption, HasTranscript, HasStructuredLayout],
                "Text-first content with comprehensive written materials",
            ),
            profile(
                Neurotype::Multiple,
                ModuleLengthBand::new(10, 25),
                &[Video, Text, Interactive, Mixed],
                &[
                    HasCaption,
                    HasTranscript,
                    HasDyslexiaFont,
                    HasStructuredLayout,
                    IsGamified,
                    HasProgressTracking,
                    IsSelfPaced,
                ],
                "Comprehensive accessibility features across multiple needs",
            ),
            profile(
                Neurotype::Other,
                ModuleLengthBand::new(10, 30),
                &[Video, Text, Interactive, Mixed],
                &[IsSelfPaced, HasCaption, HasTranscript],
                "Flexible learning with strong accessibility foundation",
            ),
        ];

        Self { profiles }
    }

    #[inline]
    pub fn get(&self, neurotype: Neurotype) -> &NeurotypeProfile {
        &self.profiles[neurotype.index()]
    }

    /// Profiles in neurotype declaration order
    pub fn iter(&self) -> impl Iterator<Item = &NeurotypeProfile> {
        self.profiles.iter()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn profile(
    neurotype: Neurotype,
    band: ModuleLengthBand,
    content_types: &[ContentType],
    bonus_features: &[CourseFlag],
    description: &str,
) -> NeurotypeProfile {
    NeurotypeProfile {
        neurotype,
        preferred_module_length: band,
        preferred_content_types: content_types.to_vec(),
        bonus_features: bonus_features.to_vec(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_neurotype_resolves_to_its_own_profile() {
        let table = ProfileTable::standard();
        for neurotype in Neurotype::ALL {
            assert_eq!(table.get(neurotype).neurotype, neurotype);
        }
        assert_eq!(table.iter().count(), 6);
    }

    #[test]
    fn test_adhd_profile() {
        let table = ProfileTable::standard();
        let adhd = table.get(Neurotype::Adhd);

        assert_eq!(adhd.preferred_module_length, ModuleLengthBand::new(5, 20));
        assert!(adhd.prefers_content_type(ContentType::Interactive));
        assert!(!adhd.prefers_content_type(ContentType::Text));
        assert_eq!(
            adhd.bonus_features,
            vec![CourseFlag::IsGamified, CourseFlag::HasProgressTracking, CourseFlag::IsSelfPaced]
        );
    }

    #[test]
    fn test_standard_profile_values() {
        use ContentType::{Interactive, Mixed, Text, Video};
        use CourseFlag::{
            HasCaption, HasDyslexiaFont, HasProgressTracking, HasStructuredLayout, HasTranscript,
            IsGamified, IsSelfPaced,
        };

        let expected: [(Neurotype, (u32, u32), Vec<ContentType>, Vec<CourseFlag>); 6] = [
            (
                Neurotype::Adhd,
                (5, 20),
                vec![Video, Interactive, Mixed],
                vec![IsGamified, HasProgressTracking, IsSelfPaced],
            ),
            (
                Neurotype::Dyslexia,
                (10, 30),
                vec![Video, Interactive],
                vec![HasCaption, HasTranscript, HasDyslexiaFont, HasStructuredLayout],
            ),
            (
                Neurotype::Autism,
                (15, 35),
                vec![Text, Video, Mixed],
                vec![HasStructuredLayout, IsSelfPaced],
            ),
            (
                Neurotype::AuditoryProcessingDisorder,
                (10, 25),
                vec![Text, Interactive],
                vec![HasCaption, HasTranscript, HasStructuredLayout],
            ),
            (
                Neurotype::Multiple,
                (10, 25),
                vec![Video, Text, Interactive, Mixed],
                vec![
                    HasCaption,
                    HasTranscript,
                    HasDyslexiaFont,
                    HasStructuredLayout,
                    IsGamified,
                    HasProgressTracking,
                    IsSelfPaced,
                ],
            ),
            (
                Neurotype::Other,
                (10, 30),
                vec![Video, Text, Interactive, Mixed],
                vec![IsSelfPaced, HasCaption, HasTranscript],
            ),
        ];

        let table = ProfileTable::standard();
        for (neurotype, (min, max), content_types, bonus_features) in expected {
            let profile = table.get(neurotype);
            assert_eq!(profile.preferred_module_length, ModuleLengthBand::new(min, max), "{}", neurotype);
            assert_eq!(profile.preferred_content_types, content_types, "{}", neurotype);
            assert_eq!(profile.bonus_features, bonus_features, "{}", neurotype);
            assert!(!profile.description.is_empty());
        }
    }

    #[test]
    fn test_bands_are_well_formed() {
        for profile in ProfileTable::standard().iter() {
            let band = profile.preferred_module_length;
            assert!(band.min > 0 && band.min <= band.max, "{} band malformed", profile.neurotype);
        }
    }
}
