//! Copy for the landing page sections.

pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub struct ImpactCard {
    pub en: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Offering {
    pub title: &'static str,
    pub method: &'static str,
    pub lines: &'static [&'static str],
    pub points: &'static [&'static str],
}

pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub struct Voice {
    pub text: &'static str,
    pub user: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Content {
    pub nav: &'static [NavItem],
    pub hero_lines: &'static [&'static str],
    pub hero_lead: &'static [&'static str],
    pub impact: &'static [ImpactCard],
    pub profile_text: &'static str,
    pub credentials: &'static [&'static str],
    pub stats: &'static [Stat],
    pub targets: &'static [&'static str],
    pub offerings: &'static [Offering],
    pub steps: &'static [Step],
    pub guarantee_themes: &'static [&'static str],
    pub voices: &'static [Voice],
    pub faq: &'static [Faq],
}

pub static CONTENT: Content = Content {
    nav: &[
        NavItem {
            label: "Impact",
            anchor: "impact",
        },
        NavItem {
            label: "Profile",
            anchor: "profile",
        },
        NavItem {
            label: "Services",
            anchor: "services",
        },
        NavItem {
            label: "Process",
            anchor: "process",
        },
        NavItem {
            label: "Voices",
            anchor: "voices",
        },
        NavItem {
            label: "FAQ",
            anchor: "faq",
        },
    ],
    hero_lines: &["迷いのない決断は、", "もっと自然に、", "自分らしく。"],
    hero_lead: &[
        "「誰かの期待」より、「自分の本音」を。",
        "強みと願いを軸に、納得の一歩へ。",
    ],
    impact: &[
        ImpactCard {
            en: "Authenticity",
            title: "“自分らしさ”が、選択の軸になる",
            text: "強みと価値観が輪郭を持ち、『誰かの期待』ではなく『自分の本質』から選択できるようになります。",
        },
        ImpactCard {
            en: "Clarity",
            title: "迷いは消え、決断は前進へ。",
            text: "堂々巡りだった思考が整理され、決断が自信と推進力を伴うものに変わります。",
        },
        ImpactCard {
            en: "Sustainable",
            title: "続けられるから、成果になる。",
            text: "セッションでの気づきが実生活に根づき、小さな一歩が持続し、確かな成果へと積み上がっていきます。",
        },
    ],
    profile_text: "IT業界における大規模組織のマネジメント経験から得た知見と、CTI認定プロコーチとしての「人」への深い洞察。物事の本質を射抜く視点と、人間味あふれる対話の両輪で、あなたの抱える孤独や迷いに寄り添います。",
    credentials: &[
        "Gallup® 認定ストレングスコーチ ／ CTI認定プロコーチ（CPCC）",
        "Top 5: 親密性 / 自我 / 未来志向 / 戦略性 / 分析思考",
    ],
    stats: &[
        Stat {
            value: "165+",
            label: "Life Coaching Hours",
        },
        Stat {
            value: "180+",
            label: "Strengths Hours",
        },
        Stat {
            value: "Certified",
            label: "Global Standard",
        },
    ],
    targets: &[
        "周囲の期待に応えてばかりで、自分の本当の願いがわからない",
        "大事な決断の前に、自信が揺らぎ、足がすくんでしまう",
        "今の働き方や生き方に説明しづらい違和感がある",
        "マネージャーとして孤立し、本音を話せる相手がいない",
        "「強み」と言われてもピンとこず、どう活かせばいいかわからない",
        "もっと自分らしく生きたいのに、わがままになるのではと怖い",
    ],
    offerings: &[
        Offering {
            title: "ライフコーチング",
            method: "(Co-Active®)",
            lines: &[
                "「どうすべきか」ではなく「どう在りたいか」。正解のない問いに対して、あなたの内側にある願いを探求します。",
                "仕事、人間関係、ライフワーク。人生のあらゆる局面で、納得感のある選択をするための土台を作ります。",
            ],
            points: &[
                "真の願いと価値観の言語化",
                "メンタルブロックの解消",
                "願いを行動へ、確かな一歩を",
            ],
        },
        Offering {
            title: "ストレングスコーチング",
            method: "(CliftonStrengths®)",
            lines: &[
                "Gallup社の診断ツールを用いて、あなたの才能を客観的に分析。",
                "無意識の行動パターンを戦略的な「強み」へと昇華させ、パフォーマンスを最大化します。",
            ],
            points: &[
                "資質プロファイルの徹底分析",
                "卓越した成果を生む「勝ちパターン」の活用",
                "強みを活かしたマネジメント",
            ],
        },
    ],
    steps: &[
        Step {
            step: "01",
            title: "フォームからお申し込み",
            text: "まずは無料体験セッションにお申し込みください。簡単なアンケートにご記入いただき、日程調整のご連絡を差し上げます。",
        },
        Step {
            step: "02",
            title: "体験セッション (30分)",
            text: "オンライン（Zoom）にて、実際のコーチングを体験いただきます。現状の課題や、コーチとの相性をご確認ください。無理な勧誘は一切いたしません。",
        },
        Step {
            step: "03",
            title: "プランのご提案",
            text: "あなたの目標や状況に合わせて、最適な継続プラン（月1回〜、3ヶ月〜など）をご提案します。",
        },
        Step {
            step: "04",
            title: "継続セッション開始",
            text: "合意いただけましたら、契約を結び、本セッションを開始します。ここからが本当の変化の始まりです。",
        },
    ],
    guarantee_themes: &[
        "今向き合うテーマが一つに定まる",
        "それを止めている無意識のパターンが見えてくる",
        "「次の一歩」が仮でも言葉になる",
    ],
    voices: &[
        Voice {
            text: "最初は不安でしたが、同じ立場で肯定的に関わってもらえて安心できました。気づけばたくさん話していて、最後にはきれいに整理されていました。",
            user: "30代男性 / サービス業",
        },
        Voice {
            text: "自分を知る良い機会でした。数回のセッションを経て、日々の選択に迷いが減り、自信を持って行動できるようになりました。",
            user: "30代女性 / フリーランス",
        },
        Voice {
            text: "悩んだ時にセッションを思い出すことで気持ちを切り替えられるようになりました。普段の仕事や生活でも、自分を整える支えになっています。",
            user: "40代男性 / IT企画職",
        },
        Voice {
            text: "自分の声の聴き方とモノの見方を深めることができました。どんな状態で居たいのかに気づけて、本当に感謝しています。",
            user: "30代男性 / 広告業界",
        },
    ],
    faq: &[
        Faq {
            question: "コーチングを受けるのが初めてで不安です。",
            answer: "ご安心ください。多くのクライアント様が初めての方です。まずは対話を通じてリラックスしていただき、無理なく思考を整理できるようガイドいたします。",
        },
        Faq {
            question: "まだ明確な目標がないのですが、受けても大丈夫ですか？",
            answer: "はい、大丈夫です。「何がしたいかわからない」「モヤモヤしている」という状態こそ、コーチングが役立ちます。対話の中で本当の願いや目標を見つけていきましょう。",
        },
        Faq {
            question: "準備するものはありますか？",
            answer: "特別な準備は必要ありませんが、静かで話しやすい環境（通信環境含む）をご用意ください。もし話したいテーマがあれば、事前にメモしておくとスムーズです。",
        },
        Faq {
            question: "ストレングスファインダー（CliftonStrengths）の診断結果は必須ですか？",
            answer: "ライフコーチングの場合は必須ではありません。ストレングスコーチングをご希望の場合は、事前に診断（Top5または34資質）を受けていただき、結果レポートをお手元にご用意ください。",
        },
        Faq {
            question: "初回のライフコーチングが合わなかった場合、料金はどうなりますか？",
            answer: "ご契約から30日以内のセッションで、前に進む手応えがまったく得られず、継続を希望されない場合は、料金はいただきません。契約もその場でいったん終了となります。この安心保証は、安心して一歩を踏み出していただくために設けています。",
        },
    ],
};
