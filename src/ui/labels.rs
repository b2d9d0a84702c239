use crate::models::Language;

/// Fixed interface text for one display language.
pub struct Labels {
    pub select_topic: &'static str,
    pub topic_not_found: &'static str,
    pub question: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub results: &'static str,
    pub finished: &'static str,
    pub list_controls: &'static str,
    pub quiz_controls: &'static str,
    pub feedback_controls: &'static str,
    pub result_controls: &'static str,
}

const ARABIC: Labels = Labels {
    select_topic: "اختر موضوعًا:",
    topic_not_found: "لم يتم العثور على الموضوع المحدد. سيتم عرض قائمة المواضيع للاختيار منها.",
    question: "السؤال",
    correct: "إجابة صحيحة!",
    incorrect: "إجابة خاطئة، الإجابة الصحيحة هي:",
    results: "النتيجة",
    finished: "انتهت الأسئلة. أحسنت العمل!",
    list_controls: "j/k تنقل  ·  enter اختيار  ·  q خروج",
    quiz_controls: "j/k تنقل  ·  1-4 اختيار  ·  enter تأكيد  ·  q خروج",
    feedback_controls: "enter متابعة  ·  q خروج",
    result_controls: "j/k تمرير  ·  r إعادة  ·  q خروج",
};

const ENGLISH: Labels = Labels {
    select_topic: "Select a topic:",
    topic_not_found: "Unable to match the requested topic. Displaying the topic list instead.",
    question: "Question",
    correct: "Correct!",
    incorrect: "Incorrect, the right answer was",
    results: "RESULTS",
    finished: "You have completed all questions. Great job!",
    list_controls: "j/k navigate  ·  enter select  ·  q quit",
    quiz_controls: "j/k navigate  ·  1-4 pick  ·  enter submit  ·  q quit",
    feedback_controls: "enter continue  ·  q quit",
    result_controls: "j/k scroll  ·  r restart  ·  q quit",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Arabic => &ARABIC,
        Language::English => &ENGLISH,
    }
}
