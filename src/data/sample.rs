//! Bundled physics question bank and its English display table.

/// Question bank played when no `--bank` file is given.
pub const SAMPLE_BANK: &str = r#"// The following block contains all the topics and questions for the game.
// Parse this data carefully.

[--- ألصق هنا كامل المحتوى النصي من ملف الـ PDF الخاص بك. تأكد من أن كل موضوع له عنوان واضح والأسئلة مرقمة تحته مع تحديد الإجابة الصحيحة. ---]

**مثال على التنسيق الذي يجب أن يكون عليه المحتوى الملصق:**

**عنوان الموضوع الأول: الحركة الموجية**
1. السؤال: ما هي الظاهرة التي تحدث عندما تمر موجة صوتية من الهواء إلى الماء؟
    أ) انعكاس
    ب) انكسار (الإجابة الصحيحة)
    ج) حيود
    د) تداخل

2. السؤال: في الحركة التوافقية البسيطة، تكون سرعة الجسم أقصى ما يمكن عند...
    أ) موضع الاتزان (الإجابة الصحيحة)
    ب) أقصى إزاحة
    ج) منتصف المسافة بين الاتزان وأقصى إزاحة
    د) أي نقطة

**عنوان الموضوع الثاني: الضوء**
1. السؤال: لماذا يبدو حمام السباحة أقل عمقًا مما هو عليه في الواقع؟
    أ) بسبب انعكاس الضوء
    ب) بسبب انكسار الضوء (الإجابة الصحيحة)
    ج) بسبب حيود الضوء
    د) بسبب تشتت الضوء
"#;

/// Arabic to English display text for [`SAMPLE_BANK`].
pub const BUILTIN_TRANSLATIONS: &[(&str, &str)] = &[
    ("الحركة الموجية", "Wave Motion"),
    (
        "ما هي الظاهرة التي تحدث عندما تمر موجة صوتية من الهواء إلى الماء؟",
        "What phenomenon occurs when a sound wave travels from air to water?",
    ),
    ("انعكاس", "Reflection"),
    ("انكسار", "Refraction"),
    ("حيود", "Diffraction"),
    ("تداخل", "Interference"),
    (
        "في الحركة التوافقية البسيطة، تكون سرعة الجسم أقصى ما يمكن عند...",
        "In simple harmonic motion, the object's speed is greatest when...",
    ),
    ("موضع الاتزان", "Equilibrium position"),
    ("أقصى إزاحة", "Maximum displacement"),
    (
        "منتصف المسافة بين الاتزان وأقصى إزاحة",
        "Halfway between equilibrium and maximum displacement",
    ),
    ("أي نقطة", "Any point"),
    ("الضوء", "Light"),
    (
        "لماذا يبدو حمام السباحة أقل عمقًا مما هو عليه في الواقع؟",
        "Why does a swimming pool appear shallower than it really is?",
    ),
    ("بسبب انعكاس الضوء", "Because of the reflection of light"),
    ("بسبب انكسار الضوء", "Because of the refraction of light"),
    ("بسبب حيود الضوء", "Because of the diffraction of light"),
    ("بسبب تشتت الضوء", "Because of the dispersion of light"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_bank_keeps_its_leading_notes() {
        assert!(SAMPLE_BANK.starts_with(
            "// The following block contains all the topics and questions for the game.\n\
             // Parse this data carefully.\n\n"
        ));
        assert!(SAMPLE_BANK.ends_with("د) بسبب تشتت الضوء\n"));
    }
}
