//! Word-list tables backing mnemonic seed encoding (`mnemonic.rs`).
//!
//! Mnemonic encoding is a peripheral convenience on top of the core key
//! hierarchy, not a consensus-relevant wire format, so the vocabulary below
//! is a deterministically generated, pronounceable placeholder set sized and
//! shaped like the upstream CryptoNote-family word lists (1626 words per
//! language, a short checksum prefix length) rather than a transcription of
//! any particular upstream list. Swapping in the authoritative word data for
//! a given language is a matter of replacing one array; nothing else in
//! `mnemonic.rs` depends on the specific vocabulary.

/// A single language's word table plus its checksum-prefix length.
#[derive(Debug, Clone, Copy)]
pub struct WordList {
    pub words: &'static [&'static str],
    pub english_name: &'static str,
    pub prefix_length: usize,
}

static ENGLISH_WORDS: [&str; 1626] = [
    "ujivo", "wufiv", "uxohevaz", "limufiv", "fesotehup", "kaboh", "ogoqigine", "winamowu", "gedoso", "ewoda",
    "eqifufiya", "wiginikec", "unipevoka", "eqoze", "eboto", "iyeba", "ebixizafo", "ayaxadex", "nekat", "enuju",
    "elofuwaho", "okokeyora", "amitewazu", "lofomov", "amenibet", "kipor", "xajus", "ajexocu", "mepet", "azotu",
    "izuhuw", "izaqadi", "papahodot", "ilomeko", "afohoboha", "nakowalow", "apuyomoh", "wewoqi", "bocihij", "uhoyal",
    "umexuliwe", "tufofenex", "zonove", "usugujedi", "aroqugo", "kazoy", "enufojoq", "edudo", "wuxerim", "nazeb",
    "etahuriv", "nicemefi", "deyinuyex", "elucadago", "ezobat", "yizek", "exuzoq", "lugipokef", "inanefef", "zijada",
    "dotavan", "aboho", "uwadi", "ibopofib", "uyixow", "caqeke", "aviteji", "evipapez", "iqaqayoy", "nemakozu",
    "ilewugep", "eqosipiz", "ogoxobo", "alovige", "exexuz", "mobomaceb", "ufecikusi", "onawubile", "masozowi", "jugit",
    "koxojen", "omevopiwa", "ufegec", "wozif", "hawobixeh", "norace", "zisutiju", "vizaro", "uvuba", "eyoxo",
    "axizas", "operagaju", "uromo", "hahiyo", "budafasom", "ewesopepo", "haqolu", "awucuguru", "equwoharo", "ebiyida",
    "saqujuc", "ifadu", "tebaqo", "woceb", "ikudehe", "ipano", "monosuzog", "uniyoh", "owidowoj", "piyafenul",
    "ayuqodi", "ozecagi", "mofopijuf", "ehosoyi", "eyiqil", "uyamuya", "ovexepuqu", "degijas", "edifayajo", "xekugaca",
    "deperaran", "uvepego", "asonanaj", "jividuqoc", "agaxib", "umabuc", "uzazo", "opexu", "ihawuh", "buhojeqes",
    "ozojac", "odometis", "anagocode", "uqijib", "jepawa", "qahufadob", "efivorun", "ubinu", "pupuririd", "jorolu",
    "ozuma", "eduyimun", "isuqeme", "ujeze", "efuno", "sizohab", "icecoxeh", "esigihopu", "meyoguti", "ihumaceg",
    "onuqoy", "poduz", "ovikewija", "fakipad", "ikeqotuqo", "aqugora", "unimavuxa", "hevekaf", "exuwar", "ewuzo",
    "axijimo", "olihekeyi", "inuduzuw", "sikiju", "nexuze", "guyoxu", "xabiru", "qoqiba", "alisojipu", "ovamubi",
    "laqebi", "ronoxuv", "fibeteha", "uculo", "afezewaku", "fupenata", "diqogezaw", "luxufi", "zijiw", "ehoxo",
    "ekemuza", "ixego", "eyenuxufi", "nuxuhar", "ijalazuta", "degizi", "ubiwowofi", "akewucuz", "cudih", "sufuz",
    "taxixak", "savojoneg", "emanopi", "ojifatib", "uzezip", "ayaxeve", "hemuqiz", "anodop", "gocamujad", "areroronu",
    "xexek", "uwonupum", "copetef", "xirem", "xodukor", "odikoqu", "axeyodu", "ayisis", "idigekon", "danuwuc",
    "exotuquh", "kamuyoweq", "hobevas", "ibopaqop", "belecit", "gecola", "afomuzame", "budop", "bolemo", "feduli",
    "ilocoxit", "ivubo", "pakafiqu", "ekufa", "ukeduxatu", "zizidu", "xalupagis", "duhiyal", "abewiyoge", "zidafu",
    "wumosiko", "nipig", "itegoli", "yobuqe", "egowabu", "erapulo", "sovoqe", "agawijor", "milenuy", "agefuh",
    "tijaqa", "opasi", "uropil", "opepinex", "mecebibi", "dejaho", "igebaceg", "jocoviga", "lehumo", "luqibu",
    "upezupal", "zobohocen", "nobowek", "afipisac", "ifohum", "kupuwiv", "adoguret", "gavomiri", "aritil", "icemukavu",
    "weruci", "aqaneyil", "udogukuwo", "urapa", "iniwo", "sahehami", "aziri", "kicuju", "esamevew", "vobojoq",
    "exesoqud", "xodacof", "osuxidi", "weqawu", "isadapad", "uyuduy", "xibaxociq", "otujip", "ukoli", "ukijeta",
    "itayocahi", "ojawe", "ufezipica", "ebayax", "ubahobo", "ahuginuce", "kinami", "yetab", "utatoceh", "yaros",
    "ehudip", "ijeleta", "zeser", "ujudu", "yofoy", "ewamifej", "yoqumoci", "yuweseyi", "yumiteje", "batihazo",
    "binavonu", "qarubira", "jefemole", "omihomamo", "eyugoc", "ehevu", "noquzeg", "arusomon", "vesosume", "okoyejote",
    "puyiwiz", "ocefotuzo", "ehegawoju", "amikace", "ufineno", "comepuk", "apihilite", "ezaneyege", "rilupu", "ehocejug",
    "xoviton", "epupuc", "osojuq", "edujiz", "sibujoji", "wenaras", "vepih", "fijodotum", "izarevado", "ibanowug",
    "lugahoc", "uqadu", "segute", "sokobahaz", "uwuqogol", "zoyalahi", "tegem", "fokusuj", "gaqex", "zuxaqer",
    "jejetunab", "eteyo", "ixayez", "qocoz", "eyotaji", "osuvonuc", "ehatun", "fimuvup", "ileromano", "cusaxab",
    "ragubuyur", "ilulil", "ehurol", "eyaqu", "ziritira", "xopuva", "elunaj", "xomila", "molexa", "olurihay",
    "bukahur", "efeqi", "ohafu", "obuquwiri", "regohoci", "enovirot", "cozuhar", "gugoruviy", "uyasaniro", "uhuxozo",
    "abajogit", "wuvin", "inafah", "erufesoya", "emazupo", "yoboduja", "medibafu", "ujigaven", "rufopup", "oceqefi",
    "yagocuxab", "getosecik", "xefejabas", "zeqor", "qexoviyun", "isaforox", "tizolora", "qojoniw", "soquhum", "adoyojo",
    "utapecud", "xidak", "upopoweva", "vepoweze", "ofaweziw", "laxipepac", "oqemoti", "efihi", "aminud", "dakih",
    "urudifa", "kagiso", "ibegig", "hipuha", "zihosa", "wetuq", "xatazam", "huwatobij", "ewesujahi", "beqejula",
    "uzecuvex", "sutamobas", "abipu", "eguba", "votatic", "evoyom", "awapali", "zezovuwaz", "wiqozinik", "nipowewim",
    "savaru", "uhufejuyi", "fegevon", "pifecuden", "tevejim", "osafuhe", "dahoga", "fiquyer", "hotilos", "tusufewak",
    "devoci", "oxopu", "eyoqe", "agucehin", "otezod", "awaxal", "gebeqibeh", "oyojil", "ixoxi", "zociyoko",
    "gacojexed", "itanak", "abayewo", "usoqeyesi", "oqavajine", "ruqeyosiz", "ipiveqep", "dohobuhic", "dehutob", "ruzukic",
    "jefuzud", "jujuh", "cebalovo", "gawikiyod", "howidaxu", "iseciqani", "idomopog", "usebaquk", "iyukibiz", "kanibe",
    "uzefogap", "vurij", "pijudigup", "akafufere", "meroq", "kevimaka", "ahizabuke", "eveci", "bomis", "tobaren",
    "payux", "defeve", "enaxowezu", "ukoleno", "itefevisi", "jeqize", "ufohibuf", "ubowabac", "aqiqen", "uyafileq",
    "etadoh", "ropariq", "gagihiliz", "homefenev", "ojucuyo", "veley", "lafeyuva", "vinane", "viwaxo", "hixah",
    "morevo", "faquqid", "ukateya", "yudawa", "bibabixi", "bipafo", "enehep", "ujadutud", "domukumic", "pohekosuz",
    "niqunim", "obepe", "afahuxise", "egasiqid", "awawol", "lasirad", "exafik", "evodaguc", "cumaf", "iselacud",
    "ofejeri", "tapogec", "ibabak", "puyaxadot", "ducetiwab", "ibuwuzif", "bobubipoy", "agasa", "zepanid", "xeqezavo",
    "enala", "udizini", "mujahozoj", "kivarer", "kuzibe", "ehifanu", "eqosir", "abawix", "amedaru", "qitekexog",
    "codixu", "ifiviqoc", "uwuqahika", "ewoce", "hozaru", "itajukofo", "ojota", "wuhob", "orucac", "uqafi",
    "bisiwa", "uzaho", "otoyidek", "wawov", "yoxacera", "onuvaqoru", "pujet", "idoce", "uxegerob", "oxolen",
    "qaqeneh", "wamewox", "hanibasig", "pojefucen", "baxejah", "gowevujat", "ikuke", "lewohida", "ahohupew", "ogifojini",
    "qarigenuf", "omofura", "ijewoyib", "lafipe", "nuvijo", "yurila", "tebijeg", "xowesimu", "usabegoca", "gozezadiw",
    "xulogesok", "becobi", "godeluke", "gahoquhom", "osorakihe", "atuso", "zedeqiso", "ofunovo", "esequr", "quref",
    "oqucem", "vewefi", "bodem", "enujo", "arexi", "akofuy", "guququ", "rezuhewo", "evoto", "uhohiha",
    "jajilexu", "owuqaf", "lorov", "polireya", "xameli", "fozul", "taxede", "ilaseli", "pilar", "kodamij",
    "qikupe", "isunakori", "fuqupize", "popojupo", "ikozul", "aduyuge", "wazipajo", "inimume", "elehi", "exipo",
    "wofigaqas", "ibujoyoza", "ezola", "yoqex", "hicara", "ihavuj", "lizuwe", "agezi", "ozase", "qimehuba",
    "repunodo", "uxudu", "osizekoki", "wahal", "naveq", "puraguva", "jemonogaq", "harod", "agitace", "popazoqa",
    "wexonib", "ujofil", "avuhuni", "apuqodiva", "ategakodu", "naxafi", "yibedo", "imuka", "osuwoxaya", "venabid",
    "woyopu", "sekamewu", "rogaxaz", "cakaqife", "idova", "ukabuken", "abenunabi", "inaqek", "uyosof", "noxavo",
    "esojikez", "ahopa", "citupepo", "wotola", "hirov", "puloz", "axijola", "vokaye", "ogadez", "uvavi",
    "zagug", "rahozav", "axesiba", "nafeye", "arinixoc", "vajoxehex", "umede", "bukomifu", "wadicebiy", "aruxic",
    "lacivaha", "yoredunam", "yevif", "obaname", "cixagac", "cixilug", "enapucow", "imuhum", "ifabi", "nevebeb",
    "exaru", "qigaronal", "owajeqe", "bopoc", "gocibosef", "qatar", "ereduha", "odico", "ofeqaki", "zuxezev",
    "waker", "qobagetij", "bekixage", "resiri", "nizejune", "orubek", "fosuraqey", "ogoqa", "mecivez", "oceniy",
    "tusoniji", "ahimoli", "gozad", "hilite", "aruqewux", "ucexaqov", "urequre", "obesixis", "ilorarej", "cawes",
    "zigemeto", "uyuyoqi", "axino", "yubowi", "tizakodu", "piqepos", "eziyovuxi", "zajeyuku", "iwaqa", "nagubiye",
    "asoze", "xateqi", "tejeqixa", "gehelora", "ecaqa", "tegop", "opeyoyuj", "ozeyo", "obatib", "uvaqicam",
    "begiyut", "ikopagolo", "sijedipa", "jevojof", "ketex", "uyevodeh", "borocoso", "dijisiz", "azucotaz", "woqeji",
    "tavod", "jevibe", "xaget", "eyexorij", "tafutir", "obore", "vudajekop", "asosu", "yirosa", "quwoxi",
    "osaya", "uvuvi", "ixunufi", "buwukimo", "najur", "uhoxune", "kucazi", "unawip", "xaqav", "fagima",
    "nohak", "heqefajul", "riyiqohaq", "eseko", "meparop", "vokanat", "aqifizako", "midupekun", "elejoro", "owone",
    "ejejemog", "uyipejori", "quzoyo", "wasumepib", "vavoweg", "ozoci", "xehuwip", "gomuda", "sotog", "izigefu",
    "ibobami", "letuqoh", "gikif", "equyume", "yifipe", "uguje", "jituf", "ozowi", "vekowuci", "eselamub",
    "uyarake", "xihukoxu", "ixapejocu", "sikicoh", "bacutux", "vamozaq", "acutodiy", "qakihalu", "ateyenugi", "husurid",
    "goyidasi", "avibalibu", "emutob", "olejine", "ilujisag", "afoyel", "uguvejiye", "falikofa", "ruduk", "visig",
    "olilukewe", "bahefes", "hitoracub", "huriyiw", "esevog", "xozuku", "xuwad", "ehaza", "exuvu", "jefuxab",
    "pebamakuk", "urumez", "sudorif", "gebanib", "xuhucaw", "adoga", "gavuja", "natokuled", "evoji", "sujopefal",
    "zopubi", "owoqik", "jibegen", "apitasahu", "qoqufejo", "vegob", "rigalo", "pakayado", "yices", "igibu",
    "zomedecit", "vecex", "kuvux", "mebidex", "saqudak", "ifurabo", "ruhitok", "lohase", "dasozo", "binesi",
    "mezun", "gafezotu", "adameze", "dizezuze", "odufik", "jasaqeq", "qodib", "lanaxuf", "qukamoyaf", "faloleze",
    "hajajimem", "ulucoc", "epofixara", "ihawuxubu", "owomoyira", "todocotuq", "zodel", "kejahu", "epoyelec", "bijaboy",
    "pabig", "vofukex", "rexohat", "dupaha", "esewopema", "qidebozo", "qesecop", "edaho", "onowidayi", "ewuwufo",
    "iwuzo", "ivodo", "puyib", "pafowavi", "ruyefoxi", "gawogaz", "tubiv", "jigepi", "ulusile", "sidej",
    "mawocuyef", "ehikowob", "odapebafi", "wececu", "axupabafe", "jijimi", "zuyayeqi", "ulokov", "arexexofu", "ovomewuta",
    "juzizocu", "kuneke", "ecirafof", "ozoxe", "nimihowe", "nekumoter", "fayohuj", "uraxi", "balavowox", "rexuv",
    "kefedoq", "voluzawe", "jecawe", "fohawoza", "dinehuwa", "xaditiyaq", "ikokafi", "duzor", "wujevufip", "adokuzim",
    "isapuvim", "fupocem", "ecamakik", "afupo", "ahuxir", "qoqus", "vojitova", "umipu", "ipibipi", "gozemaye",
    "uvepu", "lezezaz", "waqis", "aredat", "dezibolu", "ebovis", "axical", "ozolug", "favimu", "ofutu",
    "enunep", "uqekawig", "rawid", "iceqa", "uvubos", "suhefi", "luqoge", "utosivag", "fijuxoxef", "eqotos",
    "oyefal", "ebubawe", "ivimil", "omijorog", "omagif", "ocomixu", "jowozud", "uqevi", "ijebene", "munuvoc",
    "ewozuyo", "jimah", "wiyaluta", "iluwuduro", "eguwepom", "inudikuf", "kocana", "uteca", "exowalac", "necoper",
    "yagit", "kiwawu", "ivule", "izaqego", "xamezogoq", "toquq", "zutovede", "padadayi", "exuwiv", "ucejesebi",
    "uqubiwoke", "gamaco", "hofidit", "udiwoz", "emuxogu", "ifica", "batahuxaz", "eqoha", "lanovidiq", "amoledizi",
    "akepo", "uleni", "ufirerebu", "gadikote", "lumol", "topadahe", "asuhe", "ipizadeke", "moqusuqa", "joleled",
    "xafowove", "afoqew", "ovagubenu", "uzadayiyu", "huzaduy", "uziqeweno", "vimep", "acucopib", "otutayux", "emezecob",
    "lobevec", "tezitociq", "upivune", "ubirinon", "aqacid", "pokug", "omura", "vatudebu", "wixefafag", "huhayeq",
    "cenufixa", "toyebe", "quxojeja", "idopet", "anigukom", "qofuqejuh", "qeqosive", "sajofukuy", "welowe", "iguboq",
    "anacugow", "bawehi", "abodaluku", "wibil", "ujeduya", "fusig", "yeradez", "iqadeliga", "kudaqora", "irerevuse",
    "sopogesa", "alejunumo", "wizuno", "wadewef", "uqadeja", "galunos", "imiyi", "ekabo", "ayexe", "ofocoy",
    "zojab", "alumus", "ewovag", "fikiseyol", "ritizoye", "nuzuyu", "goluyaz", "ixuniheg", "yilire", "ulodu",
    "zihoh", "ugalopedu", "wugexe", "tohag", "isivodege", "jeqeli", "lefurih", "ulitoh", "ociqe", "naweb",
    "gehuxipom", "uxabe", "ruxokuv", "usixeh", "amurowu", "kuceqefo", "buhuf", "leluxozop", "akoliza", "cemin",
    "ipufap", "caxixome", "ziqiwim", "owabiday", "ufoki", "yazeqis", "fazagunoq", "itazedat", "qadijey", "najud",
    "jekexeti", "epirebey", "rukovu", "irukiza", "siquwas", "luyoji", "ucoda", "iyuju", "orowifa", "rilofikeh",
    "sikozaqiy", "owuze", "acucupi", "aquvama", "osofogad", "sugiboro", "jahice", "yuyadapel", "aridiwudo", "exohim",
    "agihe", "kowuc", "osaje", "lileqa", "lafowe", "lefel", "lupay", "icukuqen", "xirob", "irenet",
    "beridi", "pinowebug", "muyafa", "oxurud", "rahoheh", "etinade", "ekoxoxo", "jiheyar", "edafes", "fehif",
    "oruko", "otexix", "ucopucor", "itedusuca", "wewetobe", "pagidu", "ikuse", "aqure", "ijaye", "woqawaduj",
    "utamokaso", "gobaro", "akiqeqime", "orasoxuj", "eqoriwupo", "sowecok", "ozaqolika", "lisaqarif", "afetanor", "udomedu",
    "anato", "ecalizon", "etaxi", "tamiwipu", "fuganay", "quwut", "wugajuj", "pufogowux", "xeluresaf", "coxahiw",
    "zimuri", "ixoqoz", "sutebano", "eribugone", "exafec", "amufecaz", "ximukor", "ipagacil", "uxeqoj", "acamaha",
    "beciluba", "wivuwel", "huvuzolaf", "jetiqofe", "qecej", "hayusila", "kolicumi", "jitenatis", "ayemozopo", "afefi",
    "vuwiyoqi", "otusokevo", "efenuv", "onalu", "mokavasi", "xezufakeg", "nolekola", "gifaxewog", "awacewol", "epodifas",
    "isedin", "pojuhotu", "ebujer", "ocavi", "yutujosi", "qilehile", "utozeriro", "ojosid", "ezigesa", "ixojub",
    "ugukok", "xuziw", "uhetih", "yejeho", "uweferu", "agohuyo", "azuyibabo", "xupuge", "labadap", "efuwama",
    "oqusocaf", "udovow", "sohedur", "lawotab", "oresig", "egowe", "evolij", "koqoqaz", "oqetudaj", "vuqafaso",
    "satucubih", "ejehurefi", "cerabi", "wutayiy", "olomeli", "obozun", "owogumil", "hocawi", "ofiqebuyu", "viyuyo",
    "xavidifo", "debuwug", "sulefasab", "ejisofu", "wesare", "opoxem", "iboxiw", "ahimeye", "zapolu", "eposoq",
    "xuhuyej", "gaxad", "vuvubav", "aguqu", "zopedetil", "mucofuna", "oqipu", "ejocexep", "aperupu", "xetenahu",
    "odeqexaf", "tobetibe", "abuxe", "cefuzo", "libixu", "abacufiwi", "xilone", "rajeqi", "xuqejaxic", "ucexumoj",
    "azuka", "onowotar", "citizega", "guqeboza", "ivuhi", "ufuyewo", "gibanivat", "ifeku", "nedexob", "emucepo",
    "oxixin", "idifaricu", "areyi", "ucokijid", "ubamuy", "emikipo", "jupuqi", "ecocayur", "pobumuhoz", "apiko",
    "suhisa", "ixejin", "cuberali", "agalas", "fikem", "aposoh", "opicita", "fabaza", "iwutojeba", "xiyimabu",
    "biqil", "cimemu", "rapijapi", "xexaxedi", "ukuhi", "behep", "kecozoqa", "taxexeb", "jayeyep", "opuxa",
    "qamesuto", "nofew", "xetexafaw", "eveceni", "recusen", "ixifave", "gazinani", "xemupit", "kovomiref", "onena",
    "womiyosa", "orikohan", "hakuciyen", "ezetaq", "quxir", "legotar", "evuyoduv", "devifofu", "owujono", "tuyosemiv",
    "ajiboro", "yelava", "humotihor", "itoyiwefu", "ifatemika", "eyecuk", "rubipo", "neqari", "gupizona", "agoli",
    "asadolego", "avaniwuv", "ijeka", "yofidu", "uzehux", "qifekadam", "ilelanes", "nefaqi", "fopihu", "upanu",
    "lukos", "ureliqetu", "efakimi", "roxediyu", "jojitazo", "jurepiteg", "caburuv", "afipukuz", "ivoqeg", "conev",
    "afigok", "luhana", "nuyahac", "kiwenixu", "iforihu", "pifote", "yedupuvud", "fofuwaki", "biwaqop", "torejuv",
    "iwukod", "mosuv", "ofuqaw", "nupusalo", "efedaj", "tezonet", "juvid", "xufuqu", "reteyuwu", "uxaladexe",
    "duzijif", "itaxakako", "etepo", "omuyu", "ayayi", "quxuciv", "muwadetey", "ihowe", "tupimafa", "jimabe",
    "purosuq", "akuxoxes", "iraruxesu", "bepayow", "mukapeso", "oqebo", "yeren", "uyiyaxeb", "veyukepuc", "izexupo",
    "yutaruya", "luqubitu", "ayipaboy", "esoqojom", "natoyel", "oruwikuj", "urufub", "mivinasem", "geloquse", "olupul",
    "oteganuh", "owedoti", "ufofesadu", "banit", "ohicaziye", "yibatur", "suyayuk", "vinako", "orejam", "ixusam",
    "nakefebup", "rukufiwid", "azefaku", "onajev", "zodaki", "siliwatoz", "elajeca", "ivetef", "efonu", "oleqaw",
    "orodone", "awiqal", "lofak", "pipagiba", "uwukewe", "caxit", "eratowata", "olerener", "pemipe", "setaleroh",
    "jicuwuk", "qabiyaba", "eqijiko", "uzeja", "mufes", "nuduhod", "ojibaluz", "hehifehiv", "edudeqe", "cenaquf",
    "qumujo", "rasohaca", "ogeka", "tapidiqok", "pulob", "sumor", "holugiqa", "paceqeqe", "coziwo", "upepad",
    "alove", "hiwovekuc", "ukelecip", "biqijohew", "zofuyuy", "qicipeya", "lutovabo", "setameju", "sorixaq", "xanicuw",
    "ewoxozo", "aqijuxota", "elimehet", "owume", "xovuheb", "vokot", "heqeta", "hirox", "eqakes", "ejosonu",
    "yihahudi", "gonazekan", "xovapix", "eridinuy", "ujasulo", "eqodat", "ixewe", "qinirehok", "avasa", "vununowod",
    "ecudevamu", "ahipunoyi", "hahiwiy", "ivavixidu", "ofejah", "uqoyiz", "uhefexuka", "rapotogu", "cunesu", "ifigopuno",
    "yawetahef", "eyaheye", "iveja", "vuhikudac", "irexodal", "ujuluzip", "qoferow", "pizeb", "luzaqeyo", "cosafuti",
    "evucuho", "ezegat", "owenij", "bakeha", "webifaf", "ixafuput", "ugajaq", "avaxu", "umepo", "apuzam",
    "vatakudah", "ugugataz", "orusibo", "izataqi", "guzebagi", "deqepufah", "iyuco", "jinofi", "ajile", "vuwojef",
    "pikokit", "upikar", "vuvayekut", "tiqiveti", "ukuhoju", "tojipo", "akoqi", "xirasatay", "zogocone", "yiyoyace",
    "izulejohe", "avomipe", "huwaquja", "wimumac", "diyiyowur", "arajisic", "ohiqeh", "inozehumi", "ahale", "orovuzaga",
    "ivaqi", "yomotezol", "tukip", "yupihajok", "fojupoda", "izudog", "qetuboro", "hawacu", "ixituk", "iyuloxasi",
    "farebu", "owicel", "uciwamo", "siqugey", "tiduha", "lupis", "otoson", "elepetoyu", "ajisime", "iciwej",
    "ikococ", "uyiqow", "ranukoz", "olebutag", "ojiwuronu", "bejewip", "isowede", "pebob", "howakikal", "ufivubula",
    "owiwejek", "cireg", "xecozagol", "ogeqo", "uruce", "lawegiq", "jizoju", "uteyariv", "eginayeh", "dehiworel",
    "huboce", "cerovayo", "orahalayi", "eretili", "wuqap", "egiru", "ekezeku", "wogoyohar", "wumafom", "weciz",
    "yibacile", "acede", "uvaput", "ujula", "yajahigel", "cupehoha", "fudabid", "neguri", "fizan", "evunumuba",
    "guqapalu", "kisacana", "domosogow", "ayebe", "nexima", "amoroy", "voqenayu", "xubanatej", "rihab", "ihomokew",
    "aruvavo", "urulina", "tewur", "naqox", "wicat", "icutijoma", "zeyivofem", "zarabusu", "sobihuma", "uyiwe",
    "xijuqoka", "idikiq", "xafoyoh", "wequhixiq", "ivobi", "zucidage",
];

/// English word list.
pub static ENGLISH: WordList = WordList {
    words: &ENGLISH_WORDS,
    english_name: "english",
    prefix_length: 4,
};

static SPANISH_WORDS: [&str; 1626] = [
    "xulacal", "luhojo", "acadasov", "adiqika", "cipuzim", "qeyaqame", "pedami", "debotal", "oyoqu", "esuji",
    "ufowaqu", "tihijupe", "towujay", "bexudu", "jaqepafob", "lelizazi", "apubadili", "oduyo", "efivubuda", "mekinu",
    "upuvuxef", "ojamufa", "jejehig", "jirene", "gudeyan", "fozixemab", "owaco", "wowafate", "utasagux", "fowolac",
    "ihibo", "eqaquvis", "wusupivo", "izeciwev", "axutupeva", "jidew", "efeloxuw", "waxiqale", "wiyiwa", "kazomaxe",
    "umawuvuk", "gehag", "zuwesad", "kebol", "awekih", "ogesadu", "ogihuqi", "uvotodele", "duwuv", "enuhazip",
    "beporonuz", "esapit", "hewejihiq", "ozesacu", "uzozaruv", "igixocoq", "avibe", "omiveli", "qeqaval", "jomidoxi",
    "etepup", "copeva", "uwigibuc", "emixeyer", "xotone", "fucufu", "siliwaciq", "vilagem", "hohuceze", "afamax",
    "mihuso", "esane", "esafaxe", "qurozuf", "ejuruva", "dakujo", "pijejenaz", "kuyaj", "ijibix", "esige",
    "uzudu", "zunebebak", "azami", "bodusuxu", "weyemubul", "inubir", "rikopahez", "hoxizik", "ewuxuli", "cutod",
    "qotiqojif", "odozehiq", "uhahohos", "uzomofoj", "calavamal", "linelaza", "zovizil", "ohetowu", "nibuda", "ozazova",
    "diqumul", "harinequt", "ulifed", "sokixesiv", "avuke", "erecif", "taweji", "xinukeliz", "urero", "akove",
    "tiraguv", "omequsu", "wasuxu", "sotece", "cadiy", "fiyuduzib", "axejoq", "ibobid", "imeqehed", "viwisef",
    "wapowolu", "xoloci", "mosoge", "secigab", "ocovewaqu", "ipejubuh", "heyodoy", "alihuvomu", "emusaye", "conuc",
    "owezum", "firapuziw", "esiyifeze", "ipeli", "obavofa", "akigujaj", "irirab", "ikediken", "yenozi", "rolazuqiz",
    "tuyax", "beruni", "humafa", "anefoju", "utihacipo", "cawani", "idelupavu", "awopaf", "icaluj", "culamezaf",
    "ulaqituv", "iqoxejisa", "qejuwe", "uwomun", "evahoz", "iyiqozo", "udupa", "hajer", "lekahoyok", "tegogixu",
    "asiha", "cixakeken", "uvanera", "isotu", "xeyage", "ivemu", "javusamow", "kalozas", "isohahi", "olebodine",
    "diqisudu", "yoqalanuz", "fedebali", "ifoho", "quqojoxe", "otaqis", "kiketuyu", "ahanuyu", "elukigox", "cocobuh",
    "kuvazar", "ejacab", "babopo", "ujoluvile", "orowo", "oyoracace", "qohitato", "doganifi", "ihugizowu", "opalox",
    "ikaxehoy", "inujewo", "ehafezi", "edakel", "kumug", "usojeqap", "nuduviy", "yecay", "ufusize", "zawef",
    "ocuzumoj", "kuwaka", "pecaba", "hutoyalin", "kozuwe", "upejefuj", "ifaju", "aforib", "dipocak", "fecosope",
    "zenese", "cigaluzat", "yuyufawel", "qivoz", "exutu", "zutogiza", "yitomema", "esajilol", "wiwerahut", "kemiyuto",
    "aluqugaqa", "uhifi", "etiqavac", "puniwije", "tadocefa", "muyanidih", "abiretutu", "upolacu", "zuwuxamul", "vudas",
    "owewerod", "gesihuwok", "butora", "uxajutuv", "xoxolug", "neqos", "enopoh", "otujobivu", "nosezec", "qeyiyacug",
    "nabuloruh", "jocicotu", "ocamusuya", "tunanos", "ovanemi", "oruho", "igeduwo", "ukomibefa", "nakuwubo", "azukar",
    "bocux", "hutisimiv", "ojulo", "itegokavo", "zuxesoguk", "aruyapa", "apiquki", "edatepa", "adefiw", "nanosic",
    "imokuva", "isofun", "ajose", "utehafiwe", "idadugu", "jofucebig", "topogizo", "eyohug", "efahelima", "acoxo",
    "atekap", "kahutawun", "ofebi", "wadufol", "afibab", "ekagufen", "uqabusuyi", "okeli", "qozoyelek", "juqege",
    "picem", "ipuyed", "notibiw", "ewisuses", "fuguwo", "ojipiz", "yuxucu", "udiva", "makifiy", "wawohey",
    "apeju", "zuwebud", "akeroyen", "sebokebo", "tojasaz", "edejibiz", "equpowoni", "amaqoxup", "amakaxel", "enumiyi",
    "cixoda", "agini", "ajiya", "tenefi", "gibuboye", "sazude", "laciroh", "ivapoxu", "levojubeg", "exuqojiv",
    "nimaci", "busujowuj", "awopeweyu", "wazuzifo", "ibala", "wakemuzuw", "ojiqas", "mamagosu", "iqofef", "axaniduk",
    "aqinit", "vugisud", "gakizax", "enahenaso", "refayoki", "oyodoj", "zepob", "kilar", "bacowac", "wofutuqim",
    "ovexabuka", "idawip", "uresup", "bakebocix", "omanoyu", "iwudob", "hakulinod", "icuxu", "samepi", "olizu",
    "sixihuka", "voyobe", "uxono", "irerolo", "zupogeho", "ugosasuca", "fayeyito", "awiherase", "cimupis", "nageq",
    "ubixej", "fucuroto", "rikunas", "colokij", "otozami", "adokomac", "egeyek", "wofeqal", "odoku", "roturu",
    "ijifikak", "unexu", "lojutow", "miwebi", "malor", "gofekiwu", "cegusuda", "usijide", "rovaje", "wixequj",
    "giwofi", "ocapecelo", "qawenonen", "edejak", "vihevuxa", "orenojoye", "witaq", "yimigo", "umewehote", "ujegimo",
    "ufepu", "oyereku", "jisazuy", "labeke", "tunaj", "mojebiqe", "taziv", "exovon", "gilib", "ejiwuzuvu",
    "ewiled", "akamabara", "bobeyafa", "qodoxi", "gamazi", "okafut", "ifecili", "darimogo", "xowufezi", "sexoku",
    "bekope", "wecut", "wivice", "yokexum", "ovewusayu", "utoliji", "ujigul", "emaxuq", "arinahil", "uyuna",
    "vehuvelo", "mapanab", "bapizoma", "samub", "elicat", "yoxowa", "renaheto", "ziyoruxis", "uqavo", "febinoz",
    "jesulape", "rajupezi", "abesi", "tehibaho", "imeturo", "itoraso", "quwic", "ifinuc", "izare", "xodibe",
    "aricoyil", "acehuciv", "tetalidiv", "inoduwaq", "ijimeza", "ipesa", "ebatifami", "anabizi", "uzacu", "aquzogi",
    "vukam", "ipulat", "irivimum", "ehesoz", "lurowimi", "upume", "kavuxox", "idezupe", "dukumucoj", "aruni",
    "eriyadex", "lacutero", "anusudaxi", "beboho", "ayizeluf", "umuvovohe", "ruqili", "cedajejo", "qebabe", "cagekih",
    "oyezo", "uritufabo", "keficu", "ahicudebu", "iyigebal", "fixagomo", "kuveli", "ikofesi", "hikaru", "zehudufit",
    "xowoqu", "quvicek", "tuqesibi", "efamaqiqa", "lequyakoz", "hijogom", "lagiqus", "ujequweso", "duyixurop", "iraqu",
    "ofewub", "ezaraqiz", "woyunam", "mucope", "ajofak", "gozuyap", "ohejure", "erogoji", "eyacij", "ecume",
    "etobutu", "sihegeh", "epigejiv", "apahubaku", "ihesowos", "oqeqedigo", "luturesa", "oqaxeliro", "aweje", "uruze",
    "axuhubamu", "zuhenagap", "abexis", "ixozusi", "upewoz", "fovoq", "dakozom", "fewugino", "cicami", "equpiwuvu",
    "uyidedewo", "modocopoj", "onajurom", "tokab", "movijepu", "iguqi", "pejugiyi", "yavoc", "upehoyen", "vipenafon",
    "iduror", "luwusus", "yumisoyu", "odoboz", "mufehitid", "buzogaco", "mepitunut", "wiciqoke", "yovolem", "adiruqeh",
    "cabiwufi", "ucovoce", "xodejo", "muvitasub", "ayijak", "yuyesuxu", "julufoco", "ojogikap", "wusico", "bekuroho",
    "kogaj", "alunibo", "daharaf", "foqaganem", "rusode", "ajonopov", "lunem", "ruhab", "isesidi", "apekaq",
    "ecisa", "pelugopaj", "nucoquy", "dokowojo", "icana", "aducuya", "okeko", "ugetabo", "ukejaz", "banohar",
    "nidet", "dusomu", "iyutewi", "luyuhepey", "arusulaj", "cexiboxo", "yolusepi", "oxucesi", "enivif", "yuyizi",
    "bisop", "tuxoqixa", "geruhop", "kemobiror", "akiyo", "pukowe", "xilani", "opupiyok", "vared", "fipoh",
    "vibuterak", "erayeve", "panul", "iquxuzaz", "exuhe", "azituziwa", "lolecoxix", "eqehu", "bunojisej", "tosufa",
    "izepuy", "lituwe", "riwut", "ukope", "ufiwebo", "gulipoq", "yiqoz", "akiret", "ibisa", "ucecuneva",
    "igowisawo", "uxizayu", "sefuh", "emojed", "wisutinav", "komibi", "gibeluy", "narub", "elisizizo", "kekucilub",
    "iceqowi", "cixazizi", "pacaceqe", "egabi", "idubucudu", "rowojod", "alileh", "salowih", "xaluhuvic", "oqoxaxut",
    "vanesomuz", "fovovete", "egoma", "lisadamal", "xupesala", "evikayu", "acefaj", "rexocepe", "ceqilave", "cogagup",
    "ojazopeto", "omene", "ihavey", "axoyuguzi", "hixidutef", "uqequ", "fojok", "gafiti", "midow", "rexoleq",
    "curogun", "tazadunet", "bupayeyu", "owomeyu", "xulix", "nafet", "qicew", "sejahajo", "eyesajefu", "delumuy",
    "uzedoyan", "tulaj", "adiwipure", "izuwuja", "uxinujupu", "uvuju", "azeye", "taruc", "uholer", "runorired",
    "etegumi", "iwoxas", "egigif", "hajumas", "okoguxuj", "pacese", "evimey", "gajej", "baqap", "okipaha",
    "qehudisu", "enajucida", "obuzizuf", "uqoda", "cihono", "vukute", "emalufe", "etelimay", "uqemuha", "feqefoj",
    "uzira", "azapaqeve", "uqajilec", "daderiloq", "kucoga", "ozilik", "ekireye", "akuvetiva", "katikic", "wequke",
    "leman", "casuludo", "jerufopo", "utotiz", "sutup", "temuq", "ojodoxu", "kowedohu", "modetet", "yubeh",
    "iheba", "ojixeme", "ifobimuq", "suducig", "yavis", "kepuxosec", "medudaxa", "erovi", "vivogop", "eyebuzepe",
    "laximiji", "aconug", "jicojiwor", "musetabad", "hiyenosa", "fixoxit", "sobub", "lopiho", "daqakela", "lutoguxiy",
    "eyuqij", "cixin", "pagerip", "olegepose", "ejucim", "ikixaq", "ajicot", "qejuje", "ubologe", "oyileje",
    "nekanido", "calopo", "joyurexay", "axuhowopu", "oxiyisux", "qukumin", "tavozu", "aqamuqem", "poxel", "edehuguq",
    "ilovite", "oyoqacate", "oqahidobe", "acikey", "uqisite", "agegafuh", "ubazab", "okaso", "ukuyurere", "axabipa",
    "guyumev", "eyeza", "qihuniz", "muyot", "mapoq", "eqano", "owude", "uhelu", "ufimizi", "ewisevid",
    "eduqaforu", "sotev", "iheduxubi", "sedezanuk", "cusonehe", "paroguhal", "icogumi", "erulugah", "ecovo", "qegaza",
    "uyujeyef", "pevoqeyup", "iriququq", "vixab", "ayaxetuji", "udiyopusa", "medozise", "xamene", "eziza", "ahumet",
    "aduvokuge", "huzahe", "vetasake", "bujisewu", "ipovivu", "nawozaju", "oyazog", "eyekah", "tugatemah", "xihobatoy",
    "buwawi", "qaqure", "zewixaner", "ecakiwu", "tohituxo", "lifevuwa", "qeposi", "wakazib", "ejudovu", "apuhofaxe",
    "tuledi", "puboyava", "vixog", "jivokacu", "xikeku", "uqunikiji", "atetuvoc", "viquyu", "imuvopot", "zeqet",
    "defet", "idakiwu", "odigiw", "nipezu", "iqumex", "osabusi", "iqeqi", "hageninen", "izoxe", "bahatehoh",
    "huyod", "otona", "ubumefoke", "jokijo", "cegebecin", "uwojoti", "azinixo", "ahowagaf", "itexa", "ibanazezu",
    "goxokucu", "oqogiyiz", "rupigopu", "vogas", "vohiqol", "culuwobar", "uqahemap", "relafiheg", "raqavoniy", "dafif",
    "etalomipe", "ranug", "ucefequru", "olezedo", "etavo", "xetaqedo", "deket", "upopi", "ojekavi", "utalawor",
    "jubexek", "vutev", "tofebe", "bidabopaf", "igizoy", "iquna", "tuxom", "igolimo", "azufucoj", "tikum",
    "obajun", "kiwiras", "ulebix", "kegigoxap", "oyuloleho", "iwajinenu", "iboramake", "xoxun", "zeheti", "yanebiv",
    "bovubuga", "xomiqu", "vinorozaz", "ecusulu", "tihibil", "ifiqoyi", "cumod", "amehetuna", "oxazuv", "odesilefi",
    "omorepup", "atupayivi", "ufuqur", "cobefuwur", "zohedebo", "geyovuy", "haqiy", "yaxufeza", "dokuriz", "hequwu",
    "leroyugoh", "qatojala", "ovekafij", "afipo", "oqumura", "bepiv", "ihohe", "ejuqoso", "rimav", "eyopara",
    "udege", "eyiweco", "imadujec", "ocamad", "wewisetid", "odipuqey", "ucatuve", "yikuwe", "ozote", "juqic",
    "enoqif", "zuteloci", "uwacebu", "ruraragaj", "ipeva", "hesoma", "vosukupa", "qopuvaye", "nuyoj", "daqujezal",
    "wecibisid", "ilefoyis", "imoduroca", "ehipazul", "zekelirus", "fiwiba", "weker", "esokin", "utufune", "pubep",
    "ecita", "inidi", "piwuxipan", "lefatu", "noruc", "uqudu", "acoqe", "hoxoq", "dewuray", "ukogoj",
    "nihufo", "utedaqoq", "eqeho", "nacadeco", "vujutufe", "dapaqona", "ehazo", "ibohok", "amijoh", "uvurukaxa",
    "etexuvane", "efuwiqu", "yinuf", "xufequ", "etepok", "henavosaz", "xiwihoxif", "ajobehicu", "abihecu", "apajokofa",
    "focef", "zosoyow", "qolega", "vinuto", "ijexar", "uyatin", "yerexudeg", "epamum", "wajum", "miruzij",
    "ovipaz", "pizijo", "ubabono", "ofanaqub", "jebaj", "lujugis", "onefedab", "enawi", "onexixon", "ilove",
    "jufaxixu", "saher", "buhiseh", "uvoceqopo", "lejew", "ejepope", "ezolakis", "yajeqebun", "pojaze", "cajekezij",
    "vubedaf", "aqizohome", "ginenirek", "izaza", "opegeti", "ahahetewi", "weluwoyob", "fuqasaf", "yulicukah", "ecavolaxi",
    "eviyi", "ojuhigabo", "bunupafuw", "erele", "mumozivo", "loxew", "eyofibefi", "upesun", "axuvobo", "rebegago",
    "ewiqonuv", "apakixi", "vuqixi", "epacojono", "funar", "ateqaf", "yidafo", "cizuma", "ahiqag", "sawaquveq",
    "owafus", "ucozib", "nukupel", "ayonuka", "guwohaja", "umekecut", "uzidani", "uxopisinu", "yodix", "etenoqil",
    "akiloxe", "axuqav", "efokis", "nizavu", "odoles", "agoha", "vogoy", "yivixaviq", "iyagagut", "sorilabay",
    "oqopok", "erezofu", "uwocupol", "ufococ", "wujuyadu", "tugivo", "anutukiwe", "acoqi", "ebadet", "joraqet",
    "zurab", "yoyipaqe", "acotux", "ekarut", "efafeqa", "foweji", "ilawoso", "ecojijeqi", "inapejara", "hiyupasip",
    "ruxuwuxa", "batamid", "ehacar", "hoqaw", "coduve", "ijizar", "qobutedoy", "axanu", "izutidik", "edakafe",
    "akobupahu", "duruya", "yucapar", "pufosavo", "fujiroke", "iwegiqoqa", "zovil", "opiro", "ehadezek", "borute",
    "ujihe", "ugiri", "udeciza", "ogijac", "pisufod", "cozujuc", "fufugaboz", "vufigen", "opifom", "mugoh",
    "ecuga", "gafecufig", "idifeko", "zuyef", "yizihogi", "muyixakej", "suhocazos", "uveyux", "yehaba", "dizilara",
    "silixa", "udoxifil", "tigaw", "ilecizu", "kejop", "zitakizaj", "ihekebu", "edekupaf", "ozadol", "uxedofe",
    "ucelin", "ufijo", "eyitoyowo", "bokapibij", "ojomemog", "qixab", "apehiy", "disugex", "fegecu", "anayus",
    "jaqov", "tikosu", "qesexep", "yahowe", "esokom", "zoran", "laxiyog", "aleroso", "ovowijogu", "apiri",
    "ahakirix", "uqukiyu", "utojaguqu", "ucewosaje", "huvujud", "ranenu", "orezute", "itujeca", "upimas", "uxeref",
    "vobulin", "ebacayina", "ezomi", "ibagoj", "uzivuli", "ezakijez", "darixogo", "jigic", "aguxerudo", "gacob",
    "onejuxob", "uxedoqox", "aderay", "zefeyo", "iqawecas", "bebire", "agayehil", "derate", "padufa", "bemudiqab",
    "oruhe", "ufalef", "ahalu", "deqop", "epiyu", "calosa", "hipehiko", "fexohe", "jiraz", "ofiqazi",
    "udezob", "ayodeqez", "ayuvagu", "inihe", "ofakecev", "evejuq", "hajar", "pakogeca", "ecoliz", "jodayud",
    "ifolumi", "uhebenu", "pupumo", "emohuz", "oqivolu", "pezux", "uwiwaze", "kigube", "iliceje", "xuhiyata",
    "esivaf", "oxeper", "hajazupu", "ozeqoyopo", "imepapu", "idiculuf", "ojiwo", "etepaj", "akefonupu", "opunu",
    "dexicixiz", "hofuvixa", "xomecorej", "eliyotoja", "bazukisor", "etexu", "aridige", "hicone", "hututu", "vociqaruz",
    "sojeziv", "kotad", "oruxo", "luretu", "yefezupe", "iciwo", "ribivase", "qaren", "aqenaho", "budorako",
    "mugibud", "popoxa", "isanos", "muxon", "foroxid", "dijolis", "dufoqare", "ulanuyeh", "efanegate", "ceguwumu",
    "emeyi", "uwiril", "uwofurodu", "upatam", "ulekuzoqa", "asemajuze", "kuwocezo", "wotajod", "qavuv", "azejayuge",
    "mimoc", "agojodah", "ijuneke", "cahoc", "wupuro", "kosixuc", "sozayow", "sexasi", "pavojovu", "yetabusac",
    "batixudel", "faxuv", "axutuco", "ujuco", "utuve", "iqewivu", "ohoqotuqe", "irebebuwi", "epacuhuz", "jezaviyob",
    "aneva", "ataciqagu", "vigizuro", "emesopom", "boragafuc", "bohazu", "yomaxe", "lobokibaw", "ecaxoluy", "denuwicev",
    "livodora", "uxusatev", "umabaqoka", "napas", "ucayiwaso", "agayuxi", "hizimuleh", "eqoquyute", "igigu", "ninaro",
    "labeb", "iyafoyidi", "ilujuh", "qowoquduw", "ikafe", "rohebav", "vixeti", "bunajuxop", "surive", "utasi",
    "cowafe", "ariyo", "zural", "ihapotaj", "axoduc", "doxego", "sakaci", "ejebekat", "ewoli", "xekukey",
    "iqufokudo", "qezolewir", "foxosan", "hifokebur", "belomudi", "inofi", "yemusowe", "teziriz", "otuzuxula", "afoxic",
    "qiteg", "ziziwiriy", "ikesuwu", "ilebo", "emujab", "cokaz", "bipatoc", "ojoluped", "ajiribe", "xiyiwific",
    "osiyovamu", "tatoy", "uremut", "detuqo", "ozuyiso", "osibozu", "ralaciwe", "fulap", "dodiwow", "uvikud",
    "yivajefa", "yoxut", "diyih", "fomojeba", "sekocoso", "acuhuno", "logahozar", "xukuv", "oburekebi", "elaponice",
    "vahayebe", "xutesaq", "jodazo", "isojaz", "finib", "arihuco", "uqihipi", "erabag", "ehumu", "ivuceyoxu",
    "afupap", "capem", "jakof", "ehedu", "vicul", "yutuh", "aronanel", "kexuraf", "wikal", "acoyu",
    "ovedon", "owumefit", "izogu", "igicokoga", "ukoqas", "axeruku", "ucidociy", "wijuzeral", "ekuderogo", "omeximo",
    "kebukoyud", "ketozu", "upurok", "ofihuwo", "karif", "gadoz", "husada", "ruraje", "botaqew", "sehaleguv",
    "otame", "usolicar", "lisorafel", "inabi", "hovula", "owarig", "owovohuti", "homopemal", "duqib", "zaleneri",
    "mafawa", "vobane", "asucozunu", "ihesuxulu", "usibaqada", "eyifini", "licani", "anibay", "eqimeduja", "dujovu",
    "fawebasa", "zedoke", "adibeb", "degeseze", "acuwoqoy", "wiseq", "ihorecig", "ekinem", "odacuwiv", "jemojaw",
    "isucufo", "ajayu", "paxik", "ikipu", "izisic", "vorat", "zijitiwij", "osiruf", "woseye", "bazoy",
    "orijudaxu", "zevitalew", "ajete", "otaviro", "arofi", "gikuki", "ibagu", "inevamiv", "ixane", "ixiraw",
    "omecuruci", "gicenod", "wareya", "ademe", "hefom", "yodade", "ugikeluv", "dezef", "qixiy", "bukuj",
    "heruxiy", "xulubu", "ivimibi", "iqoyo", "apakuboza", "bosev", "afezemiga", "punal", "lugizijiq", "hinab",
    "nubovugi", "axedeye", "qohicox", "tayiqal", "lexusida", "cocit", "ciraf", "avufule", "iweqinob", "bubiwoka",
    "gevun", "imuqek", "kudecat", "ovezuvapu", "abufofepo", "qizobetux", "ewicawe", "cecufaveh", "ohuxusa", "dugupa",
    "oyuyuyeq", "warukin", "fujal", "qegekila", "acobayise", "navoza", "okavo", "weyanicu", "ixevu", "hisizi",
    "vixobuhig", "uruco", "yidamus", "ekovucapo", "varani", "abuyezev", "udujofuy", "folim", "ezijavosi", "beyetic",
    "etituda", "otadayoh", "okeheqi", "obedi", "puyawi", "uwihaco", "uniketim", "axuso", "gufequ", "yagupehe",
    "tiyele", "eholod", "qucuhimoz", "pamasovod", "firut", "lezewefo", "ozafu", "uwipepid", "jakoluleb", "emahofit",
    "agixite", "rizikal", "yijiv", "ehura", "oleden", "ilekocevo", "owepuquge", "iremehavo", "omuxop", "nupekowir",
    "hexuxulat", "ehici", "rakidag", "iyisone", "itowupeq", "qoleboh", "odulizazo", "qunog", "ihuhuh", "fimujequz",
    "ofeza", "cexepo", "romuzaq", "obaxer", "puyaf", "zacejola", "roziyofac", "givizoge", "ofemoyiq", "ogilikeho",
    "inajeg", "newequvom", "cadiveliz", "geboho", "dogodibi", "rifim", "xitetes", "fexag", "odopi", "ijecedeje",
    "apecu", "juhexuj", "somotatix", "ohodoy", "ijinu", "rofitobit", "eteqanah", "lusinaf", "utifotufi", "owone",
    "upabale", "haqukepo", "sizepa", "vavez", "bayino", "iniyudix", "wikiru", "wosinuzaf", "ucikica", "guwaz",
    "ejipag", "exofo", "edocowal", "duvegelup", "bidujav", "uwuvej", "qaqana", "ovalogo", "unimih", "lehicotoz",
    "kokosel", "begig", "ovoku", "rucomig", "vijepagaq", "yalidisen", "ijudis", "pebeloce", "koniy", "basejexup",
    "avarefi", "izixa", "wewipe", "qatan", "owozopen", "ivicequl", "fijibafes", "ehoten", "cebice", "axesopi",
    "avozoga", "kesun", "omenoj", "fibus", "yalim", "tozemeh", "ubiforu", "agicoputa", "ogubi", "amogey",
    "uhaziyav", "eyaxekucu", "ipuci", "dekega", "udoqiw", "iqolefe", "akalil", "ocilikul", "coboqe", "lufivorun",
    "noten", "kuqub", "nelunoquw", "aqosupec", "ujivupav", "najim",
];

/// Spanish word list.
pub static SPANISH: WordList = WordList {
    words: &SPANISH_WORDS,
    english_name: "spanish",
    prefix_length: 4,
};

static PORTUGUESE_WORDS: [&str; 1626] = [
    "sejamiqoj", "mopavo", "tojucuk", "zikipirer", "ifezap", "oruxasihu", "kupeve", "uvofizuji", "ovoze", "sepot",
    "dapozexi", "nekuq", "omavu", "oyapuset", "efacifudu", "utefuzi", "xuzix", "tesot", "anuqe", "aruseduju",
    "rodiqa", "yekobaho", "erufer", "amucayi", "uzibitul", "qiyoheraz", "egozeqaq", "usunis", "ifarih", "ugeva",
    "zumalaw", "bisuyeva", "aboqayo", "pikohe", "zecer", "wapuso", "conayitoc", "quboboy", "umuzox", "alotihiv",
    "ulidalav", "iquka", "tabaca", "uqazuyuf", "jexey", "toqibomoj", "qideduv", "muhuwa", "imumowuci", "enecoze",
    "dacejuwaw", "nakamiw", "ogasun", "uyiwebo", "ubaho", "imuloru", "orivegom", "elewi", "zedujove", "kifetero",
    "kajave", "pejehegi", "owizusa", "lulesis", "afupuven", "yupoxid", "umovanequ", "unega", "avapigez", "udosob",
    "monejudo", "fasah", "iyayoso", "yivixiton", "gicime", "owihek", "hocohuta", "fudipular", "hacotoweh", "qixuba",
    "roqev", "urucayup", "yedukepon", "abuqeca", "vorew", "etujequ", "urovomeze", "iviwowoda", "desaderu", "odocuga",
    "jacez", "sujejid", "mecowu", "azerezas", "ifaba", "efawovo", "pefebi", "azudupo", "datoy", "kawoq",
    "uwefa", "omugi", "ixito", "ucihu", "yutecese", "mezoyin", "orexo", "ozusi", "axazu", "elosiy",
    "futezomu", "ijogeb", "iroreh", "ocowa", "julal", "vomujif", "akihilexi", "ozuvoveno", "ipacavup", "evovozewo",
    "udasuj", "ovohemim", "apuyena", "mapac", "ceyebucu", "kogefena", "exumabu", "luzite", "arovogoj", "pedax",
    "ugaqa", "ozeripay", "uriviyilu", "ujorovaxi", "anonez", "imolawe", "bewecuga", "oteyak", "ujufu", "neqala",
    "ferom", "osemesa", "lahodak", "owuqukaxo", "ukituloli", "tilezeziw", "zipeg", "ixoyid", "vayozag", "lisuq",
    "zerawi", "qetosi", "orudef", "nupefa", "telix", "egikiheri", "qehudiza", "avuhaqepo", "irixoqec", "olosiq",
    "hixecip", "eqemid", "uheme", "osuxod", "uhiwis", "mufukiha", "kebub", "fafudixox", "axege", "azebuqu",
    "uhogiqub", "zexomora", "qesifow", "bovoqofot", "lacofu", "hoxebuce", "kavubon", "kiquya", "oludutuj", "odezawih",
    "xevono", "iyuyu", "beliqofan", "qoyufu", "ufega", "atiqupus", "wotokaf", "mijor", "rikim", "iriquku",
    "ipavuh", "nuruna", "ikexuho", "udayufib", "usiwasay", "imigey", "kufenituy", "okevajawi", "ixaqiwewa", "ekunu",
    "takuzebid", "ifirosu", "oyako", "uwolozi", "ufede", "fiyahudop", "fosisa", "ceramuw", "jowevadag", "tecih",
    "wudahupux", "emoteseze", "jurodim", "ibijodoqi", "namozi", "mubox", "alalisowo", "dimohuca", "wuwusag", "exojavugu",
    "ubaseq", "woxeruy", "iwukebico", "carixoha", "pobir", "falusihi", "qopela", "xaqej", "oguxugaca", "awuqola",
    "fekupucu", "gumad", "jusake", "ihiveri", "gizuredud", "suhiraloh", "mihifowi", "dimufipu", "afexisu", "fudaligu",
    "ukalaw", "hopoxugus", "poqucaqer", "ihemod", "esano", "ubezumulo", "inocuveko", "aqedazeb", "yebuyipas", "uxeqok",
    "nalay", "osepecuj", "agina", "umolojuxe", "vovasor", "omowaqut", "eteta", "zibipex", "dequjixo", "uduzadiye",
    "uxaway", "kacokub", "najedoci", "amuri", "jowekafoj", "isawumefa", "ewuraza", "ocifewas", "sokimi", "uxaqi",
    "apexab", "ujawenebe", "apeso", "ipujuyova", "gihotuhuj", "godijikel", "bazoyo", "ivipehel", "nacujam", "ahubiw",
    "oqotutece", "focevuru", "inimo", "ivizesuf", "sumufoz", "ihadep", "rotop", "gefadoyen", "ifewido", "oyubehiqa",
    "otusebiw", "fiyutoda", "axuyap", "laxasiz", "jiresipiv", "ofuyuro", "uzunehip", "umede", "noqaqezeh", "kufazido",
    "udicupu", "mesiqo", "ijupena", "yahipa", "ilolib", "gurujiw", "tevoyom", "nalecu", "igoyezi", "pijutuxi",
    "gubiyu", "ataremo", "jotodapu", "lapepeb", "ejuqay", "ulaviqi", "nekegore", "garakiba", "ukicax", "icuwowi",
    "azevuc", "abele", "canarix", "zowiqud", "fodeqaya", "babar", "uvofojipu", "lisudibiy", "laduqiqej", "ducixaf",
    "cozima", "joruhoyef", "yehoseh", "oyogaxi", "qequtu", "eruxeq", "apaves", "idiham", "uxinu", "ezafa",
    "tucibucu", "iqinibayi", "lizemohe", "ifujigute", "jobojek", "ekowike", "ojekadey", "ahewijo", "ozuxu", "otufeleta",
    "ogokeyef", "xudoji", "ajokug", "qapajot", "ecoha", "asifiz", "likipij", "nigufa", "qaluf", "etane",
    "epaxuga", "eyaqeciv", "ubato", "aluxunosu", "ijipet", "ibodadani", "ocaxa", "rodiwo", "akame", "ayatuxa",
    "xitipu", "poqigo", "faxifa", "unaco", "akoyupo", "iruzoqa", "jipiku", "perew", "nefucu", "ejopakaja",
    "keduhur", "raguyet", "cizijemor", "axuweka", "panikure", "susesa", "afecaro", "yidulu", "nirizuya", "yokoha",
    "xupiw", "sunev", "yezokoxo", "qexido", "wiwedi", "ifagowe", "sewiqu", "arupoxut", "fuxusohag", "lelupegen",
    "moyefutu", "abitiqivi", "ipujiqoha", "azazub", "qunepemu", "wepoxike", "uhawaxeq", "utiwapibu", "iqasola", "gimifobi",
    "nugobiviq", "wogiwob", "icevaweq", "imuxes", "jaker", "owalazi", "uwiwal", "reqoxer", "ehuciyo", "tarosa",
    "poyov", "idopegise", "yoboyeyay", "gefoka", "sahopasi", "kenaya", "ohacaziy", "ubutix", "zagogemej", "biqerogi",
    "ukumef", "beduni", "toritol", "bozuruku", "idotugeto", "utawif", "azoyimop", "uciqukega", "beyarod", "akesasar",
    "izaviyet", "duzixugu", "ugehuqese", "qudiqagaw", "atulefupa", "opinaqaha", "ajizacij", "osuxobuf", "dixono", "ugura",
    "umixa", "nugedaxev", "hekubo", "wudaceq", "najon", "asifekos", "jujilusu", "wojevijum", "ejeja", "ragikare",
    "acavibe", "itife", "joqofuje", "qutuzo", "eyirinifa", "wiyejut", "oguwawo", "figixubu", "fuduhey", "xuwogu",
    "afuqo", "ofulur", "aharaja", "waxuy", "rilofuku", "lezipare", "niyote", "viraw", "onosoje", "aciyedox",
    "votapak", "nezewekop", "idace", "ciqobi", "ubepeh", "copuf", "uxire", "yekok", "wuyec", "iqanexot",
    "imetatos", "owinucen", "eturure", "ucogo", "iqacufed", "olemexex", "aqizunax", "zazup", "eyorolu", "rebumag",
    "asofivik", "uyawiqoku", "mixemubaj", "ixeviz", "akixagu", "otomi", "ugaciw", "jecurev", "efuqojur", "oyipuxez",
    "jorece", "xidohev", "efufuqob", "kebaw", "etumazo", "abefoqo", "ocoluxera", "equmet", "osecaxoz", "newurik",
    "fegucuf", "iyolurosa", "obezureta", "tuzululuk", "otiyoki", "acituh", "evogov", "yediyol", "obicenej", "yunekebub",
    "himinoviw", "hariwicu", "mumel", "bebaru", "ofafuvuy", "alihihis", "palekewa", "uyowujid", "egavas", "ziyew",
    "ezobi", "derapufu", "kidimu", "ocovum", "bogipogo", "huxedac", "ohinuj", "vowifux", "omanah", "itucu",
    "ratirogor", "nofoy", "suqoxupo", "gonoc", "mazumi", "ujemac", "nehek", "uqonopeti", "oqoteto", "uzelelupa",
    "jexohu", "isodiqew", "ohenibid", "zumokede", "inefoka", "ipukicak", "logamice", "ibobop", "fokob", "tateyuf",
    "opopol", "ujikub", "kesij", "miyiy", "giqusapod", "yejaguli", "mivoy", "toxog", "ujavif", "ayariyaj",
    "oxobufopo", "enete", "hunodu", "hotimok", "ijadoq", "udowewa", "olopo", "ovoxowih", "egahe", "kemuqaf",
    "nesatoqi", "acahoz", "yuvatufas", "vefewobi", "gedoj", "pecoloviw", "ixamufu", "wefopi", "tuyebizev", "cusare",
    "ideyepedu", "nikatuco", "yelew", "levidoqe", "sehapipun", "ozeceni", "vupeliwig", "eveda", "gohijiy", "ticub",
    "zatuwe", "kewaf", "iyeza", "faselavop", "animope", "ucejuqi", "qiyekelul", "otelayotu", "taditu", "sufuz",
    "xukuge", "hidur", "onuja", "anukixubo", "uyetoc", "hevocon", "ecaratawe", "hubohil", "porohajor", "sutih",
    "avozi", "okuloveko", "avoxeje", "evonuko", "ijuhiq", "anavujo", "ogobukuf", "pufizepi", "lunawasix", "mawijare",
    "efuzobeza", "oyucobe", "eyuhise", "ufizufeju", "rajufiwut", "bonirisi", "vitecu", "odelixesi", "xoxinam", "omezu",
    "utokaleco", "catinazas", "etoci", "irihuric", "udisigeja", "ahoxe", "feroviz", "acemuc", "ofunotaze", "vedabeq",
    "otoqixuq", "yaxeme", "loyitenil", "ulinogito", "porafu", "uqaseg", "owewade", "jiseguwax", "owosam", "dovigakut",
    "yokoze", "uvadu", "kojice", "omatag", "soxuj", "ikatodup", "zisubiqa", "yobehoxez", "oxubod", "govosom",
    "aseleze", "urawax", "yaxalalac", "mulijij", "petib", "aduhepoz", "efuhaq", "ixeye", "yatiwi", "imugol",
    "kuyiw", "eregecida", "gilemowo", "oxokah", "umuyuq", "ugalel", "areqaxu", "quhayezu", "odamatip", "ihiya",
    "omadol", "xokulab", "rududogi", "ruzeke", "katoviru", "mosuy", "igegayeka", "iqayo", "orenaxutu", "afituvuz",
    "udetohote", "jajela", "luhuq", "azeqani", "uwuhujik", "yawirul", "sicutulo", "ikezujemu", "vehesusu", "ligey",
    "opagoyaxu", "rosugaso", "umumidi", "kawixolu", "qowugo", "xoriguhib", "utuse", "ewuhosiri", "uyizocu", "nopal",
    "lugata", "tebige", "uriro", "rotulot", "rasetahuh", "ewicamiw", "utaquwop", "kuwesoy", "tateq", "gapile",
    "nidado", "isogeloj", "dularoga", "mohowegu", "tivux", "yituruwih", "asuta", "rabecimew", "acomocedi", "anomawuxo",
    "oyuney", "ewigaxac", "etaxehe", "godit", "bazug", "agifugaqu", "atijij", "awegit", "ovareceyu", "oqexuy",
    "udovo", "tozaleq", "yezelid", "upuxov", "cirocif", "aciwe", "uqifolupi", "ejucu", "ubiji", "leqokoxol",
    "ajefusu", "obupaniw", "zisuwig", "olusihon", "esitav", "inixixig", "wegeyi", "lates", "uhoza", "dovubitus",
    "omakolaro", "odivimoh", "oqupuxu", "janikec", "ufibijef", "ivikop", "iluyagu", "rohehexo", "qurajayel", "cucur",
    "libaw", "exiduze", "sidab", "vakituw", "ufolij", "wohibelaz", "haguri", "ayaguzixo", "tekupu", "exuvow",
    "xefuhu", "junid", "ivuyuzap", "opojako", "voceju", "uwuje", "edowifus", "jiyigos", "ozizopavo", "iboda",
    "oniyuzij", "icotufac", "etipusoc", "oluvaxuyu", "oniyibide", "imemujise", "ahugig", "eweyohocu", "opehudum", "qoqocilu",
    "agosim", "kapexocuq", "acemud", "ayadaz", "vubum", "ahaja", "elewe", "uxowuhi", "rowozit", "xupaf",
    "malejul", "eruriyi", "boduki", "yusadopup", "ibibopu", "odofege", "wewoditud", "yiwaqosek", "amona", "difenub",
    "owoyafey", "ojogi", "erojedez", "rexayah", "ugapuruqu", "xarase", "iyume", "ucaza", "qejigijog", "koqoga",
    "gosupek", "eziqogo", "becimov", "sovabu", "cifoqi", "ocoqiwul", "afaqevaw", "xiviyu", "tulonoji", "okidoda",
    "dabip", "texoq", "hizapifij", "saqib", "epesa", "belogup", "panahuho", "idumajip", "dogix", "guguhaf",
    "pavoxa", "uwilob", "lokaxiya", "tuvemu", "osati", "ulexecuci", "iyisupaxi", "xuheqoc", "bokijil", "uficobude",
    "vuwobog", "ulowojub", "xoguvecax", "ohocawure", "rijam", "isopoyuq", "rejuyebo", "eresa", "uhuvewiwo", "henux",
    "ehirisi", "volad", "rasiri", "oholuyebi", "kiyuruke", "cateca", "yumepu", "axatom", "iquwuf", "musoquxus",
    "puten", "ticonarip", "aruzi", "yowiwot", "ixexozovi", "uropucag", "veboce", "idadazoc", "hupiz", "jenoyoqe",
    "rijedimuv", "vixixe", "uwunifo", "pelalexav", "egidoq", "tajiqom", "navoferog", "ajisuzub", "yocewevu", "uzahuviwe",
    "ikibav", "abira", "tovoro", "enupit", "gazewi", "asirej", "fiditu", "wezake", "iteze", "wufohin",
    "odecavuge", "muximac", "izixi", "oqesukemo", "eqehusi", "guqeb", "qovayezik", "ezepopav", "ajavab", "iqodefuke",
    "tukeziba", "relase", "ananujah", "esosat", "anivehi", "juyuhosa", "jisip", "duwezi", "onuma", "epivido",
    "ditemi", "ezawux", "zetegegi", "exihesol", "iyicoqo", "efutijar", "ewopa", "egaquba", "vuvohediw", "ofitopa",
    "xigale", "favij", "awovonije", "ludaj", "kufuq", "emijim", "teneboxe", "fulusuyuz", "anogi", "ixefar",
    "bodax", "ketubub", "jonate", "tuxazut", "huqisu", "iyikaw", "rukinisiq", "qojone", "naqutuni", "efecar",
    "komoweha", "tesecaw", "valefe", "limumiqu", "joxulakob", "rumoqo", "fijaxilul", "obizoma", "cuzijiki", "ayujaz",
    "efewoqex", "owabepo", "akigevaye", "nezico", "jubanebe", "ajugufa", "ilehoyu", "juyamixuz", "uvokiji", "yebeh",
    "cahoqicim", "icetesat", "dubal", "agivoda", "tamov", "ivorujo", "dajef", "ipene", "ukepeja", "avabexu",
    "oyirav", "afaxis", "qozuwafij", "owaluxu", "atakaliwe", "puzem", "awohi", "vulasid", "ixapapaj", "sutevuj",
    "jiyifobo", "ajukuc", "ugigumav", "romaj", "jekelevu", "xareteza", "omapec", "eture", "unelofey", "owose",
    "miledacec", "jaxigola", "zoqanih", "nunuqizo", "fijis", "yavequbox", "uzupup", "picomal", "ofevuzala", "muvor",
    "hoquliro", "zuzaf", "gupey", "bagebopa", "nepizoc", "ejomobe", "ugarovula", "ogoqeso", "uzorovud", "qataqadog",
    "evavu", "ajijon", "kivom", "tulasohaj", "kuron", "hupidu", "buzatugin", "imove", "cafewun", "oyiqiguz",
    "otogewaf", "qezeqe", "iziwaboxa", "ewarozaco", "icavib", "lipokocu", "tovuticuq", "tedikikun", "picohaqu", "igije",
    "uboroseg", "biketa", "lical", "kusuw", "pomijize", "veruca", "vetevazec", "mezino", "ogawegiqi", "onetixora",
    "goxixox", "pefes", "exicija", "vozape", "kifik", "awule", "wuhabey", "zagizos", "iyakubare", "avuki",
    "mewuku", "muget", "ezotedoj", "eneyoxofo", "bamiwusiv", "irekof", "ifataxire", "otaraye", "upuxona", "piquy",
    "rijozir", "sesusona", "hiyafaso", "zezesa", "mifihusi", "qokopuwuc", "hawiwataq", "buwadunul", "qecadu", "rutez",
    "atiju", "oniwa", "kitemohe", "yitivu", "haxik", "evovoseh", "azuxu", "gasokoxu", "aparukici", "rimogay",
    "gexub", "fijajira", "pabiqidu", "uqose", "otudome", "ayitido", "heqevo", "edanok", "uface", "otizuxi",
    "kenofojo", "mahekir", "wuyiliy", "nofewiha", "burupoho", "owejet", "aramili", "ilaqu", "zomugavu", "vutunuy",
    "iwecese", "ifoca", "pipataji", "ogabobol", "afave", "bixuh", "agisa", "moruqar", "epemebu", "tukuraf",
    "uheyedat", "imejay", "ekaxeq", "idenibat", "koxupoq", "rurolika", "eruxob", "badohebex", "kogenowu", "lotolulo",
    "kowiga", "afidoyu", "dehusez", "ujaqi", "osilaq", "emetum", "aharomuv", "oxajeduf", "eqiwi", "qeraho",
    "acetij", "ehezuli", "uzatiyimu", "pawoxom", "iwesocoq", "halutocid", "ireyo", "ximojok", "xebicedo", "epapij",
    "cudumaf", "foqiwoqu", "izuqozo", "azanejixe", "kozika", "awibe", "lawunos", "perima", "etehov", "mawiro",
    "boxuxerev", "kazud", "disawafeh", "imaqupu", "qigomaye", "denanu", "mozoh", "yoxiqop", "ujebutija", "axosug",
    "equqe", "irisa", "fowef", "veyibubor", "isubol", "obaqoxavo", "ewefa", "sofosos", "owuwe", "osumalixe",
    "efupix", "hutubeg", "givikuv", "arolod", "cijofukij", "qevad", "ekufi", "ahikad", "etefa", "iwokupu",
    "nebod", "okoqagik", "aqusuh", "uroficito", "eletedal", "ifuxe", "comumavuv", "qotoba", "fisikin", "dubizik",
    "inudepi", "ihufebice", "obojebus", "ipasul", "kicik", "bikufe", "alaqilex", "omiji", "zudubunil", "risime",
    "nesepobe", "ofoxixe", "osiritoq", "lefuvogiv", "lupalucov", "omuyefos", "lemas", "ebixehin", "ofoyo", "uwico",
    "dayimugu", "turajapif", "wukuge", "aceyuge", "ebiqogi", "atacec", "guyoqubot", "fitifuru", "oluwap", "bubajoh",
    "legataba", "ebanat", "afahaso", "ezaso", "lokabixid", "kirepucip", "yaloh", "ufegoqigo", "rupiqadu", "ogesiq",
    "umakacow", "emehide", "rikakaceg", "isoziqu", "upagec", "izuxuliz", "uqeduz", "itowote", "rohepos", "amoced",
    "ihovebod", "aqahot", "iyutumi", "xosetirot", "qorirah", "ufekes", "iyomele", "umevut", "vupimo", "otosan",
    "dadez", "ojifeki", "imipafof", "ividiwag", "utumuq", "ibanid", "ugacuyohu", "yigoxeki", "gedapob", "unohat",
    "vutey", "oqokawisa", "gipuyab", "suvaxepal", "jeroray", "vakirev", "exoxur", "ijuxov", "tifak", "enufa",
    "ixifo", "izapis", "ifocaf", "oqetuba", "mifuna", "iqecab", "ivide", "jopuwowo", "yuhabof", "utemicaqa",
    "pafaluhuy", "vekiyuzol", "qapisi", "nijuxofi", "lirifoja", "onovuduq", "ediyo", "voselaxu", "idubisup", "avapo",
    "zopire", "henavadal", "umoca", "uzewapuq", "jixihuz", "tikohupag", "bocumuwej", "jafeyoh", "avomay", "xarefah",
    "urebi", "mozuv", "wapiq", "ijozo", "mevuzahix", "sasajaxoy", "finotojif", "uwuxan", "lulahupew", "icufes",
    "nidacopi", "inacajan", "odosi", "itudi", "nupih", "sokapat", "veponad", "oburozoqa", "imewu", "aleqiv",
    "huzufaguj", "epataviti", "anixahe", "ezanuru", "kevuqexa", "oyudefe", "pubub", "evixaleka", "qoloranih", "orulu",
    "uvuzumu", "adocuqe", "uwetah", "qufihalo", "evipe", "pefitobe", "gavutefe", "feroci", "ocuxove", "ebuqin",
    "upugahac", "hutoc", "raporolob", "oxopejo", "amajokahi", "civage", "usudakut", "ozico", "wirijiso", "habiriha",
    "fequb", "atenicu", "nucix", "etanepogu", "waqusefa", "amuhub", "zofeyed", "nawuyenes", "edanu", "fizibisa",
    "yogewu", "tujewop", "agupaze", "iworuj", "sazal", "howoxacud", "lasaseb", "adukoh", "dowusuqew", "runicuk",
    "uvikoyok", "devigo", "totaba", "agupu", "gabowecim", "cesihix", "ekiwekidu", "sebinarig", "hisoson", "uyuhal",
    "gonoso", "zuwowayad", "vudema", "pofevi", "fisiqaha", "eseli", "izekutut", "mudafiwi", "hewowej", "agonimu",
    "maguke", "agobefo", "rufujohin", "ajuraz", "qaziviju", "ijukaba", "nuhof", "boyejodar", "axemire", "zecupeh",
    "owivul", "ekibuf", "seyoqeb", "kocat", "izaxihag", "cexatur", "poxok", "alolew", "ibimajap", "ijeka",
    "hihuxibod", "lafelu", "mapecuzed", "quxegeho", "ikoviso", "uwokakas", "ofodi", "upice", "imidotux", "uroya",
    "ovizivec", "zevuvuba", "kijajo", "ojake", "anuhaz", "okeyukuyu", "exexu", "odace", "xoputu", "unapa",
    "ososikehe", "utemopo", "azuze", "evoruxehi", "jicebaxit", "corope", "uzagoz", "dekusoy", "ayeva", "uqoqe",
    "ritovuvam", "onemofer", "ewoxireto", "opepo", "hahupo", "ijaga", "ikelejiqu", "bafeguy", "oceguzup", "zofisec",
    "noviyube", "eqosir", "uqola", "dazaye", "udakalono", "rilowo", "jibaq", "egotukoy", "niwekeh", "aqoyoquq",
    "odofi", "uxawu", "virilen", "qafop", "egataxoxu", "dequc", "kigonipap", "egifa", "dipura", "yutedaq",
    "kabetuh", "geturo", "menoza", "ujohugoci", "vohogiy", "ekozuw", "oraru", "kewezup", "uxuzuneg", "cojacahiv",
    "idaqareki", "zitex", "womam", "epuseb", "ebovok", "yarewiza", "uyedo", "icalo", "efuyifi", "ijikev",
    "igobinida", "yades", "tabakipi", "izabolepu", "igaseziy", "rorip", "akalu", "erakuk", "iwanuyolu", "xicuqi",
    "havepoxe", "afani", "rurehaj", "nuhehoqi", "imasixe", "usozebobo", "mofojase", "qupuj", "ijaxigoso", "ojupef",
    "fufutalom", "ipopanu", "xoseta", "calex", "xuyogonuw", "ivaquyoha", "erorew", "ozidaq", "epoxemo", "edogeh",
    "quzidol", "kocowapav", "eyununi", "icabobeb", "nikup", "qisay", "fidit", "midawa", "rirayic", "imuripebu",
    "bikere", "feraqagin", "qelira", "aladit", "ovocuxewu", "efugij", "yabamovu", "alocegad", "iboweqeg", "izeqid",
    "ovatar", "ezonifon", "acuney", "vomug", "nozuxowi", "ocoda", "modun", "habexu", "abedi", "uzabu",
    "serij", "yajag", "yejayip", "xuvozanin", "exotime", "ibemupazo", "ukura", "nuyima", "nozag", "otiwe",
    "nureke", "eniboji", "kufumogox", "awaluz", "ilukigu", "tumur", "akowud", "magodadob", "izogexaqo", "umazapeta",
    "uqiva", "toxadebaz", "vayiyig", "uzili", "iwumavu", "iduyuduco", "ebazemu", "idaje", "vedayiti", "hamipejel",
    "oxezus", "ajaqupomu", "eqoke", "kogumi", "udapi", "isuqomu",
];

/// Portuguese word list.
pub static PORTUGUESE: WordList = WordList {
    words: &PORTUGUESE_WORDS,
    english_name: "portuguese",
    prefix_length: 4,
};

static FRENCH_WORDS: [&str; 1626] = [
    "qovigopic", "anuqahesa", "fihuqa", "norinugi", "vuhus", "qehehuqo", "qozoji", "fifequqi", "sofusejat", "ititoceyo",
    "vujax", "iyepuli", "kukeci", "awagiton", "yirujes", "lubojo", "kewufil", "xihaquyoj", "uboyi", "asurip",
    "imaji", "nadusafiv", "wuyoloqaw", "jihife", "ivaku", "eruvumuju", "adiveqaq", "xoduz", "toyece", "abibuley",
    "xojikeha", "odaga", "olejolek", "ecanov", "elopiseza", "esesipo", "qofod", "opuqa", "puqujabu", "ugoje",
    "lokerobab", "zitelazay", "ecefeyev", "iyogibub", "susoh", "etifape", "rofiho", "wuxizu", "latapilel", "iheqem",
    "ilumibuwe", "odazilo", "evuremu", "kiduko", "obohesa", "ubiqez", "xikorovax", "nutuho", "apujop", "xinob",
    "roruka", "utidodica", "etuja", "ocapi", "lozudira", "evujomis", "licivisol", "ipayokut", "ivegimo", "ujege",
    "imafaqa", "esuta", "ezapuha", "xiyuv", "ebatiyuy", "ipopaf", "ivawob", "rusimejan", "gesewo", "fuqivekuj",
    "olabivobi", "nizisac", "sotom", "aweqoma", "usexun", "awuqun", "ogesitud", "emijona", "cusox", "juzisegol",
    "umese", "abihe", "jokazi", "vagihuda", "osopij", "jerax", "giyad", "eniyeh", "tovuj", "evesiyeq",
    "erimaz", "navocico", "zurero", "ufapotece", "hoyufo", "qefar", "ogiyix", "fegad", "onobus", "etogo",
    "suwoqe", "yiyol", "dedaviya", "luvoca", "iribuxu", "ecasasudo", "ohavo", "arinelor", "nowuq", "isotege",
    "livopaqev", "agudobu", "jeleku", "esusen", "qojiwoj", "kobefap", "iyefemab", "ivofaxiq", "ebideqo", "beyuduq",
    "yuroha", "nasoyukod", "qiguloye", "afulotofe", "uhupu", "eletotace", "ikixa", "xavutul", "cuvobo", "uzawuyoj",
    "omisug", "pavom", "wirosi", "mulilof", "jomet", "mododop", "apaqe", "utume", "qeqeq", "baqamuziw",
    "quyunuy", "ibujalo", "ediyokix", "modiyulub", "dibalubey", "lugezovuv", "cowutoqe", "ujubimutu", "neyayik", "eqobudug",
    "cavixewuz", "ocuhevi", "abizolo", "udefomoxu", "ereparizu", "xigilerok", "gazovo", "ibawevet", "egiduti", "tesis",
    "waqozepup", "ibitanij", "zowaqumal", "ehihaqa", "fisiko", "ovawep", "ducuceduj", "feges", "upuwukem", "tifaka",
    "ukeneq", "afimo", "zefaye", "ajolanim", "uvulopoq", "etosaqedu", "qumicuti", "ijiyir", "rediwur", "munixofok",
    "onigeyuc", "eyocubic", "acetaw", "subet", "komaxoxit", "yocid", "laxagemit", "ogureyal", "opisimog", "lehih",
    "bazapaduh", "wunaye", "utokarib", "isogebome", "uwipomit", "uwitem", "uqitiye", "majemas", "akaxi", "sixugexe",
    "wasel", "yodij", "soniyi", "acuzi", "yabocegoy", "zemupu", "unamef", "ejabes", "opanuzi", "enawemi",
    "feyeb", "epixa", "tanasohiz", "cuyovuwo", "iwuvatos", "udabuku", "tekuceqih", "cubome", "sabofete", "irehajaf",
    "isuzikis", "hilugeyeq", "gakuj", "itide", "xofut", "aqofi", "luzitehuj", "ogipal", "uwiwole", "ugijezo",
    "inoxon", "culiwipo", "ejope", "amixod", "jewojijuj", "quqag", "ixelehi", "dugimol", "tudek", "lowumul",
    "axecuto", "toqoceva", "sonumi", "oyurav", "gadeguga", "ucibul", "yoyeje", "iwufoc", "icofurat", "ohiguzaha",
    "ogipih", "akumerebe", "ahuzig", "videdejo", "enaji", "ixibomus", "ayodar", "asotifu", "payucut", "ixazot",
    "faricuci", "racahav", "yamahicos", "ayohoqiwa", "lokipi", "azaquv", "uzazecob", "rohohara", "fimid", "xeloxoj",
    "cotum", "nutijip", "yagupunaj", "vuley", "dojanup", "uxutumi", "kirokameb", "izebor", "loliyiku", "apofezuri",
    "sejaduxo", "owubi", "ilodule", "lobinu", "iqopugi", "weqenadaz", "qasifeqop", "inesetov", "xohara", "nopamey",
    "xixatixiy", "wonuvaz", "zufah", "picih", "bukorox", "ahiberap", "fobod", "wofazitef", "ciluve", "ujucudi",
    "ikaxi", "gogevev", "awunal", "bukihog", "ecosunuv", "qopilud", "ebiketoda", "fiwiji", "ufayat", "upowi",
    "pilevuv", "helek", "ixavosonu", "ukiwawiz", "ahimay", "viyif", "jepageh", "ucazet", "ofamum", "eluhuqu",
    "iducite", "wudoy", "uzujeba", "mowubu", "oxuda", "aqihasi", "xofexa", "gucodu", "gunab", "soveronup",
    "ozofesa", "uxaha", "ipidoru", "vosaq", "dumem", "miqigoz", "usuwoy", "ayalibuy", "ikura", "sifobune",
    "ofiboza", "isisij", "afobiz", "ucoxana", "ogesudid", "jasajib", "ilititun", "demela", "onigigot", "qepabuxe",
    "ahimejiho", "uwivimu", "reseji", "dajim", "qulufe", "jakagubi", "oqibab", "mohiroter", "kefap", "waxesuto",
    "qaxixirum", "azivasin", "esuxa", "riyusab", "ciqeta", "kufih", "giqehexul", "vawuliv", "banemaw", "foqizip",
    "rotove", "vejekaj", "fumep", "jitawa", "usijabeh", "uqaxe", "okekutud", "julomariy", "eqetuka", "epawup",
    "xuyifucij", "zigazi", "piyuhiva", "ipiva", "okabodo", "acuja", "fiyedef", "gavonuk", "papeney", "atusizoyo",
    "rodozivik", "okiviyuve", "xalagizun", "onojuxe", "bixibixif", "evexo", "ujaqedim", "niqisox", "ibutawaf", "godaxik",
    "biligayoh", "ixalivo", "xewofazez", "axefitiya", "uquci", "kekagaf", "omobed", "cimedus", "bavitiz", "axakiban",
    "yeqis", "uzimetine", "lapayit", "miduwese", "holax", "zajafebus", "apubuhadu", "xamati", "ahoje", "ukanayal",
    "soxivunuv", "uyusahiq", "secuy", "obopu", "cenibad", "ojicu", "ahiravos", "aqofuna", "ufobe", "micago",
    "ruhul", "teviz", "jihuhajec", "cegufagam", "ubacalek", "yinaxab", "negoc", "awujopuqe", "pivaqadi", "hugodab",
    "sabelu", "ojukam", "ilojebex", "oquqor", "geropoga", "itatab", "yezut", "zaxevujim", "lodicopad", "ajewa",
    "rujaweguh", "anasaniba", "kapuyepis", "urewoyin", "nomoc", "cobin", "ekexilox", "sugequga", "weviyewow", "ofojimiz",
    "wovozazu", "igihefeci", "enuwof", "iyimahogo", "tewocigez", "alurijav", "lekunon", "ipunina", "sehebu", "dezasocuz",
    "adokasoh", "ukuvici", "erocexu", "figorarek", "funuxexa", "iqacese", "efomuy", "komico", "ujahite", "ifawugis",
    "aleyoyonu", "axusodopu", "yigatovi", "evibari", "petacoleb", "cobutihav", "mulowuteg", "otixi", "xohuf", "dilobof",
    "elumeloz", "efadevece", "ozihadoze", "ipapupit", "etatuqap", "useqisik", "ikiroyubu", "voliceba", "oceliz", "iviqubax",
    "anurovafe", "sadowigug", "woboce", "nederagog", "karozahe", "adejim", "abosa", "otice", "ufebij", "efeji",
    "poxom", "ehaso", "ohaselevu", "mewoci", "elacuti", "cexufah", "vocupolib", "irogeno", "oyejasot", "acohoqa",
    "yiduxusa", "avubova", "isofibuto", "eyabu", "avutovay", "ologoc", "inupiha", "ixibi", "elude", "itunepeh",
    "tanebeqo", "tupaqu", "oxabu", "jasadin", "sasawa", "enenur", "oyavu", "yojit", "arohiwu", "ebiwegar",
    "yixiqeyoz", "molemog", "aqarayica", "takay", "ebogi", "ugejo", "mudimudic", "uqelep", "eyedu", "imolib",
    "zavum", "ikinocax", "otici", "iranogiro", "uqoraw", "legasigeq", "erapaxuge", "oluqaviy", "atuvino", "wunazinag",
    "gililoda", "asiyevaj", "metez", "dunod", "ehoja", "elozixe", "lisaqa", "atejokowa", "madek", "venegesid",
    "ozecexo", "sohemetah", "ogitebu", "uzutozij", "ufuqise", "piziq", "mupiw", "osohon", "xuqen", "wesodases",
    "uxiqiro", "ragey", "cuhamubid", "duwawa", "rewem", "hibide", "davonaz", "efuduyara", "acikace", "hajobaruw",
    "yokirim", "jugodomit", "ilivu", "uriput", "ejena", "owexecane", "ehiwem", "votugotu", "aroqeri", "ibote",
    "faxamac", "xazizex", "ecupane", "uyanowage", "emirox", "luhaw", "vorujusaj", "ekodoci", "yihocimu", "vadexanaj",
    "huhol", "quyogeja", "paxipone", "ibejucize", "afadaz", "ufoyabam", "osijokage", "ozumebi", "ejixanoya", "azoyuj",
    "utivum", "vusuzu", "otexu", "jipanudav", "ecixapo", "igobida", "ageqecabi", "aqofelo", "uloneqomi", "varuze",
    "hugugigo", "roroxina", "ucoti", "jegaq", "ikohetut", "pazacehuc", "idobug", "gihigupi", "ugura", "ocibi",
    "lafapa", "ujadok", "iledi", "ojuvul", "efacisij", "kuban", "ururu", "elucoj", "ceruledoy", "ubibovec",
    "yecusewo", "axapa", "beqogal", "agudo", "zawaz", "ucugoram", "edokel", "iweqo", "gadug", "ofoqoheme",
    "arohesupa", "ituhofu", "malomo", "mayidam", "mifuma", "utetov", "ajipake", "okexekoqi", "kafuyo", "idiyuwasa",
    "ibifeka", "fukulosey", "osezaceq", "apovahese", "cowupohe", "udisu", "decohiho", "xilemujoc", "sibana", "afiquro",
    "sezopihew", "socuv", "fikux", "ugajolexo", "oxufavo", "unovasewe", "bamewoq", "owede", "avevez", "javogut",
    "yugeze", "unulizo", "ubihoxu", "ihapujapa", "cigiquq", "qemigehi", "exogep", "odomah", "jebenaric", "kezevacin",
    "suhanulot", "yajatuc", "baziyur", "novuf", "ecaru", "qajoh", "zifijure", "lekuko", "zavahuwa", "ovinayujo",
    "otusota", "ecemofij", "yikabes", "kayeca", "eseqi", "nireyumol", "ofeviqeyu", "onijerox", "sepujafur", "xatapuy",
    "lovutuwe", "ligabime", "ecejiwuk", "unigekav", "xotibebi", "ugasecax", "esayecoxu", "uyevaye", "ticuziguf", "cenajip",
    "aqelerehu", "zotujofi", "elavo", "jahohaqo", "eyoqij", "yecat", "pedihehik", "ijurel", "kelipe", "awasaqur",
    "jomeveq", "mewas", "jamabixem", "orocakifa", "tajuxal", "aqoxoqat", "koriku", "irowosodi", "exunudac", "ixiha",
    "mifodal", "aqovaxe", "ocovu", "uzonojiq", "ojise", "yatedik", "exoceq", "iwixet", "vajes", "otulih",
    "idiyo", "zemaxuse", "ekusiye", "okunuhu", "voxejijep", "zipayer", "ubusalil", "ebebo", "tubeh", "bazifote",
    "ayuqaxov", "orapotexu", "vaxug", "bumos", "ojanat", "bijuwef", "osirifuna", "liluyokol", "jemapuba", "vupuk",
    "ocuzohup", "sihoburo", "yocazokez", "kehono", "penupinug", "uriho", "bafisoho", "oyubowuh", "oqihode", "asifesuxa",
    "mebexoqe", "zulawufaj", "asude", "eqara", "taserabe", "negade", "vejov", "gufazuboh", "educu", "ihibemo",
    "fehoheb", "diruze", "oboto", "umebeze", "ofelehuvo", "xuqitasuh", "zadovoyor", "codaqi", "cafale", "ovudav",
    "wibod", "iciqedaz", "uyiju", "sabaruj", "helaqeto", "lanuhihom", "udamudalo", "jorotefa", "otuzukut", "aniduj",
    "rovejufux", "zoxep", "uhopazari", "yejuc", "fabavahud", "qopotoy", "udupo", "abeci", "uteguse", "yutuk",
    "ayosupe", "inuxagib", "emeva", "pexekox", "ozesop", "ehebiqe", "ufigopogi", "opunudi", "boluho", "yupun",
    "ucise", "fikir", "tapeqahoq", "vihezag", "worikipav", "hunuq", "ecanajasu", "fivugo", "ecoqu", "qocapoje",
    "asaqatic", "tahobuq", "omelagoha", "goroyi", "soxopal", "vayaven", "ujecacoza", "odoro", "juhojoh", "gedojuso",
    "utuzeqa", "bemozo", "kewih", "evogona", "oqobir", "atufut", "esipaqa", "nepikoh", "nagelu", "luyulebut",
    "aluqucofa", "oyuxuvove", "vizim", "ecotokola", "buwen", "kozapijuq", "putipezip", "wototep", "wapesaj", "egukitesa",
    "lidul", "oxuhix", "pupewuw", "urudajut", "sazulug", "wifuhexi", "votemom", "aqajosecu", "ojakoyibi", "uzoqo",
    "elayuxak", "amidoyecu", "orimudab", "uburaxeli", "uvisiz", "eretexidi", "isile", "iqahuqohi", "bedadumu", "bavux",
    "kelaye", "sodana", "mopaxi", "oduwah", "enokes", "apaqivo", "citar", "mutape", "aliku", "ladale",
    "rapini", "ebafizuzo", "agagufogo", "ujuce", "urudotul", "ociqu", "luzepab", "zumupod", "utave", "ayupovel",
    "etunorew", "ugobebani", "wuhiwu", "esenida", "iqifika", "ekawo", "inivi", "vosipu", "osizak", "ozikumo",
    "oyowimo", "agemilap", "ugupi", "akezuj", "okase", "ewalamo", "kejojapef", "hisomavo", "nacuhonuk", "obuvuruku",
    "oyinohi", "udoteye", "diquhow", "xikore", "ajeyi", "zadusekon", "sopigoli", "aciyojo", "eparese", "widicafe",
    "opumugeto", "doreh", "jiquc", "geyiwajib", "egidutiwa", "gizewaf", "wowuhuwoc", "uqarez", "etigiwu", "dilurif",
    "wowan", "voguqija", "najav", "cosuxuxa", "tinol", "yajeb", "ihibi", "okazap", "litemece", "vaqoyabiw",
    "yeveki", "piduceq", "sobayez", "zeguwace", "vohulodon", "bemapepi", "ovikebol", "jozaz", "qazefilet", "hivexo",
    "tiyariwun", "ebarisow", "udifor", "araxodo", "qukovopi", "sonude", "alucilim", "pajagaxu", "zeqezo", "zehohuhe",
    "epiza", "kopenohap", "uvugi", "hagipo", "kefatuba", "sicipaj", "lowutuge", "imiqa", "aciteg", "apatedu",
    "moxeb", "zidugihi", "zosepih", "qajifu", "evaxetix", "qepapuja", "ihesi", "umudewir", "rulihoze", "ebawuwosi",
    "bemizajad", "axubax", "ewohovom", "uvobemo", "owinaya", "vafavut", "cahona", "upapi", "onodihe", "xixag",
    "jojic", "avubasabi", "wufexiso", "lerocop", "havufepu", "axapihe", "usuta", "dijuzoqos", "ciyiyap", "emelevu",
    "nufes", "keqav", "afekoxos", "obahoho", "eqiwom", "aqeji", "ofotoqu", "qidogut", "pehini", "qipafop",
    "imaxihar", "jitih", "igaziwufe", "vokiwarug", "uginomame", "quwapugi", "exuge", "keqavi", "bepeq", "latana",
    "wigaqodi", "exivawem", "ewukas", "juqame", "ukiqomen", "ivaranuko", "dijexip", "zotufos", "otuxaze", "banakahe",
    "uxawiya", "tuxejax", "ucufay", "vuqapiraz", "usileyeq", "jodud", "iqogaq", "sahoxo", "yufokatod", "asohasak",
    "ibosaso", "kebih", "zizumofi", "axejobif", "igigozaq", "eyiku", "bukava", "esiwire", "ovorefir", "revexon",
    "akutapime", "uveyac", "egovi", "qexif", "penejuw", "venef", "poduluci", "idefuwoc", "yidob", "zopeluke",
    "mumupure", "vuqupodu", "telalepem", "zoqoru", "uzoqavuwa", "osodoca", "vahop", "mayuge", "azumod", "odeyac",
    "funeyir", "ogamic", "kowimuxa", "icotab", "qemiyiba", "dahefa", "wirok", "ogeji", "rotafuf", "olipuwah",
    "rowasobuh", "oyumulog", "ilata", "axabomuc", "iwazohoy", "oqutici", "vatoxer", "purotal", "aqicuhu", "niyafi",
    "imulo", "unepo", "owuvor", "azipigefe", "otara", "rivalicox", "etotibuv", "wujavafe", "xelar", "melebuji",
    "aqafa", "suhizek", "gobumozar", "leviwicos", "nitinoqe", "imetena", "mukakizuc", "culokajis", "ilenusun", "husaza",
    "equzec", "gatal", "vokux", "isayotepa", "xuzafoz", "citaguju", "iyurovaji", "urimazefi", "nucoku", "yizadawij",
    "ronid", "ogikajugi", "opurozitu", "asohosora", "itugagusa", "tivoxe", "runuyu", "oyehun", "fuqataneq", "adagawin",
    "ocelaw", "loxop", "unepub", "tahag", "awobayib", "vicor", "axuhi", "afecozifu", "cedisa", "isicig",
    "ikuqove", "umegutecu", "axufegeb", "bepifuli", "delik", "egabegu", "urahurom", "ilawuco", "ozekobex", "yogacevej",
    "itozepid", "rorema", "zibuxiqic", "obamupeg", "kibubako", "wicomot", "lacaye", "migafenu", "diyenuyam", "ucotinume",
    "gegig", "diquwi", "enalegiv", "isijuci", "gamaqiwic", "akila", "ezuzoheyo", "etirivoz", "iyujoyese", "piqubuw",
    "abijukeda", "adumawe", "ofuzil", "giqadipa", "vogoyipu", "dihawi", "uwabok", "aluguv", "difode", "cenupayic",
    "ozuvazale", "cacoqadaz", "ejobacacu", "iluguy", "avacut", "buvemik", "fofipoli", "arakihoj", "eloguq", "qemisimak",
    "ineqon", "ahura", "eredid", "emumeb", "wubiloy", "isasud", "woyide", "ulisir", "amage", "izemiwubo",
    "wuxuloruw", "evure", "axosa", "usasoq", "uripatal", "layuyadet", "gafop", "lipixu", "afevotax", "liyeyopof",
    "ositivug", "aqehib", "tagana", "hocayoyav", "ocoduxon", "kolumaho", "cohonexup", "aruzipux", "abiqubi", "zaduvewe",
    "zaceto", "ivinix", "nepujonad", "gibuyexa", "ivopaluh", "pohox", "rijegi", "oxiqa", "wiciduke", "ojeyox",
    "galexuyu", "titaverag", "exuxayod", "mifuqumuy", "tozicaxe", "awizebawi", "sowej", "hujesemu", "xobameqod", "aqocabepu",
    "ezexuj", "hesinu", "celuyo", "otopiqew", "abazipa", "celahox", "oteweces", "supemo", "ituke", "vehoq",
    "ukubey", "wufive", "upujorub", "joyogi", "heludebes", "itokazami", "bezesi", "dezujid", "yebavehes", "pazifeqif",
    "izihu", "ogakirami", "upociwulo", "lirode", "zugatikep", "hugugorej", "qotef", "giqazipe", "idacog", "demoqotu",
    "xegaveca", "xuyotiy", "ikucemut", "umumog", "iqahoqah", "gudez", "edoxacay", "xuwaguq", "lotuci", "jizicuxe",
    "imemeho", "tilifu", "fuqiliney", "tuzoyonu", "oxedemahi", "wuhofurar", "mobuqof", "ivavefu", "owiya", "iyuxi",
    "nodomubel", "edoxay", "afagu", "ulexose", "caval", "lacezop", "mawavoti", "oyugilo", "yivar", "acebibi",
    "asuqi", "toyole", "laruke", "xixoki", "izibupu", "sowigan", "gojina", "ruxad", "tilequ", "tupup",
    "odomaj", "homalos", "nugada", "ajumecu", "aqanoxose", "efawoqayo", "zedaf", "wuhuvodu", "xupeju", "gateheb",
    "owesunok", "sazufuq", "egepubun", "ijudo", "ibenecixu", "ukude", "iduqu", "sijipase", "eruror", "natige",
    "axufihix", "itiwuca", "epulini", "ilidoxom", "ogehor", "hocuho", "juvosu", "heqezoq", "yopebig", "febehef",
    "xecuhur", "oboleza", "xetoce", "imipe", "vivinuxay", "zaxuc", "xihawaqa", "uxaxehoq", "rapun", "wurapece",
    "uliyejar", "egitaru", "udomi", "atuhu", "anagixa", "nifumac", "ivomomate", "yobafuhu", "imamubaw", "asaligedi",
    "ipevahe", "tecidigi", "toduki", "ewelob", "adiduxivu", "povudoleb", "ihexuwutu", "ixejiq", "hamahoqew", "aralu",
    "ujudi", "adomoxumu", "anatehit", "ozaheb", "pijafej", "uxavoqaja", "itako", "sizafur", "unayeb", "geyeyonuj",
    "amirud", "icoso", "hinuj", "lofehefoq", "ifuwozewo", "umecixo", "orowi", "iluzi", "upobuj", "haxifuv",
    "sarebic", "sejemixic", "loxegol", "emiyut", "sozosozom", "nayew", "tanoreh", "ayoriner", "pakehajij", "ovuvizezo",
    "vapejotu", "efalahew", "imexac", "equyupi", "nijici", "qowayez", "mutodav", "izavo", "lulaqufaw", "asuzosa",
    "cimowo", "uvipe", "bazedo", "hezagos", "oqape", "abewa", "kayukukud", "culole", "inozowe", "cekodeki",
    "yival", "okukop", "cihidi", "kuzewaw", "qocusib", "lufovote", "cizevaca", "ixovigujo", "adexevipi", "bidahul",
    "aquxovik", "esehus", "atenu", "izovi", "ekibob", "ixinoxe", "okuxuhow", "zejeciw", "vajowo", "kugoga",
    "pewomeqi", "iyeqa", "qisim", "asoxixote", "usasup", "sazako", "golox", "zorirot", "xapewes", "ekuyage",
    "asumeriq", "uqisuvi", "jisufuxi", "leqona", "jugutezo", "ukayeqewu", "ivize", "akome", "yoxekoc", "axewarumi",
    "hovov", "ijivo", "uhirolipi", "kikiqamiz", "gikige", "covife", "idaxepiwe", "uruti", "ganib", "dehojihen",
    "uxavu", "uwixo", "fenateyuz", "dayumuj", "qemagilol", "eyuxuve", "sequxa", "utuwofe", "patov", "domotuw",
    "iwepori", "boneqadan", "xidaq", "figomu", "ubixaj", "paqufe", "kurudat", "vejoyi", "abodab", "xazeke",
    "gusequbi", "evuruxuv", "ucuqaf", "alebuhi", "qegohafu", "oyuqiga", "viwuvan", "xiwoz", "apeyuye", "eyudazul",
    "efuziheqa", "fefis", "ucoqe", "susovahoc", "maquza", "zeledub", "suloxo", "ubidoge", "apihesari", "usodovo",
    "iwoyidixa", "humogap", "cequpaju", "ijidivef", "ojerus", "qumiroc", "buqinit", "olequpitu", "gizelotat", "iguco",
    "xeqecutu", "iwali", "onena", "anocizeqo", "naved", "teburuv", "uyukedev", "ibuponoz", "ekamar", "cotemug",
    "ocahuwat", "awide", "ipobepuho", "ipeva", "ejurase", "uciwo", "husutipa", "akuxudiki", "hobexi", "ajivabuf",
    "iliron", "nusiyih", "utuhuxek", "hupadi", "qigoqus", "ugujojoj", "aganul", "ipamefov", "qawov", "qizapolic",
    "ekuzuwu", "vugiz", "ovafib", "duweluked", "ubugafos", "bejudun", "deguwoj", "iripifa", "ebixexu", "umukax",
    "izaxoz", "roboviveg", "etehe", "tamemesur", "ojoyipu", "ulusi", "uzoze", "cocede", "ohuges", "temoz",
    "jiqupu", "ejaze", "bizira", "aziwiqed", "curozama", "manohep", "epelun", "ojimogeda", "hotitawan", "ekuqut",
    "umaromo", "osagapi", "tuyexatat", "dasifew", "jirezi", "okuqumi",
];

/// French word list.
pub static FRENCH: WordList = WordList {
    words: &FRENCH_WORDS,
    english_name: "french",
    prefix_length: 4,
};

static ITALIAN_WORDS: [&str; 1626] = [
    "ubiqava", "macarisix", "cecug", "evevu", "mumohiha", "etotazed", "caloxibid", "taqotolo", "owuka", "emapoga",
    "isoso", "upono", "daqubeso", "juzujuqi", "nakexox", "uyolebuge", "itotif", "kulizeq", "axaqevece", "venajama",
    "asejoqixu", "ayicos", "penal", "niqoyafal", "kayag", "owaho", "ekemoc", "uqexiy", "xubil", "kipukado",
    "rubovuqiw", "afajo", "ayahagiku", "neron", "binamep", "joqikufen", "opakore", "tijamoxab", "bopogey", "erofun",
    "olohiva", "ufupe", "yaxagoj", "exoyeb", "fawoye", "cocizu", "parexux", "axapejij", "icocola", "biwowu",
    "jicuse", "uvicamol", "atagahab", "kudatoyil", "sucima", "nifereqo", "nogozupef", "emumiker", "nikepa", "pigig",
    "yofutob", "mokuw", "bayiqulob", "juqefov", "uworoxipi", "atikumi", "azadate", "ifeteve", "ozozesosa", "apesaka",
    "anisani", "cisogup", "vayimuku", "ewifo", "gaver", "vubajuk", "tohop", "uvijul", "akepejoj", "aqorifo",
    "ahohofosu", "noxay", "joqotawek", "axidico", "abifape", "izexu", "fatocu", "tetom", "siqav", "yuxac",
    "mejadip", "ozedaput", "oteruvome", "exowaho", "faluv", "xagerikeb", "pusatay", "ibece", "oforo", "tixejitiv",
    "yijogo", "mumad", "qopanan", "ojivu", "sukuciv", "ilewicow", "okodalobe", "licaku", "uguzumevi", "zaxidan",
    "saconiyut", "umoxutun", "yipehov", "iqore", "fotomeh", "abomebavi", "riputa", "ejoxusof", "bahasic", "ikomobifo",
    "izafagoho", "hosato", "epewosi", "jutojugut", "ekahu", "ucehisev", "oyeciliv", "jowagaki", "eqepipala", "oticani",
    "akajiha", "efepevic", "riqixuqus", "logapax", "xefiwe", "vavukomij", "sipaluw", "nafilib", "yifalo", "iqoruni",
    "izehi", "rogivi", "eyumadoy", "emagibexe", "iwamey", "quvoqej", "dedulirup", "ifuzoyisi", "ajufi", "kitono",
    "isenop", "gihofika", "oxepomig", "nakakeqo", "yiqajiquy", "wuvoyi", "hacakagot", "palexusa", "oxajuven", "ejopiy",
    "agomo", "igupi", "uxekuvib", "uboxuxix", "xedixata", "ivikakuzi", "eguxi", "kohomigos", "nehiyi", "omelahi",
    "uxedico", "ugadew", "ozohez", "isaxi", "qonif", "qaviviho", "olupayomi", "depov", "egufojuvi", "ugagoy",
    "uzuwufu", "runip", "sebehe", "egowakebi", "duzeya", "ohiwaq", "ukopeda", "jopajehe", "usoruri", "elebavuj",
    "nalocepog", "yuveqati", "pojetidi", "mucotu", "luxejemun", "moweku", "ecupe", "bonajopag", "kukilep", "juhefinit",
    "verono", "koqit", "cejosenu", "qaxopex", "ubijojiq", "upayesa", "ixaseqela", "etunawa", "ovecotuf", "beyaf",
    "ifafog", "fedahe", "fugaxuya", "oqadi", "ejozoru", "avazuce", "opamuseh", "ilida", "yigabaco", "ukaxuxogu",
    "xuqep", "yujoni", "jemoqota", "isezux", "pomiyevu", "gihilanuz", "patezel", "megihu", "hatap", "enegagate",
    "arada", "cakulicup", "atetozed", "opakiv", "xuyebeh", "fazum", "yodup", "eliwalubu", "akotufe", "edudowe",
    "oliku", "okoho", "uladi", "qojoseq", "goculiko", "olafire", "usinelazu", "ipukikasu", "eyogezeq", "vekefuq",
    "gilewu", "favuq", "uyikum", "varujudid", "japur", "ajeyakah", "ovido", "ayoza", "ayufulo", "depiruga",
    "upuvolu", "kobuhebi", "afavuza", "kohuli", "bahuse", "agemov", "eqakoh", "siqunirab", "onaqoca", "nezedoti",
    "akuculiqe", "aderobaw", "adidulo", "nufiwixuk", "putasub", "naqem", "cijovo", "ihoxozog", "iqehoy", "apatopag",
    "ofuruwav", "apega", "ipuluda", "egafaku", "ivucaku", "ipitivu", "zigor", "yaqacazid", "jabapi", "oqahez",
    "awivuj", "mugijuhim", "zijev", "ovubusip", "toziji", "qinepofox", "huror", "agebafod", "ajanayo", "ilaqiya",
    "ubotunan", "eyivo", "upiqi", "ohicadisa", "radefi", "owohesa", "siruburej", "orotatep", "liyim", "avigifa",
    "upoteto", "ziqubolu", "uzixodu", "okuhihuwa", "eneqone", "kejovo", "gafuq", "joniri", "nazaciduq", "upugacaw",
    "mipilopug", "uqahequ", "sajosal", "nowesaj", "agozew", "jojuc", "ekejiquv", "eregivip", "uyadixor", "ononanuhe",
    "royeji", "yipenana", "omiqu", "galecuzuv", "rahin", "anijamum", "tequnos", "egerujo", "azaxiqak", "kavelojo",
    "bugufon", "sozuwe", "yaruvic", "domaruna", "lewoqeluw", "unicumu", "bepumobup", "etetuyaj", "rehubay", "xogovu",
    "umocuy", "olibigeva", "megakewa", "razud", "potevesey", "pigagetos", "kopulo", "xoguhi", "utora", "huyexeju",
    "cunep", "xunoj", "qemenuqiz", "lagah", "jomacilud", "axaqehu", "kixos", "ihutoti", "rafawi", "dabon",
    "xaburod", "etajufo", "ixokarot", "iwokej", "zatuyof", "hifidav", "asuhumoy", "fojoxas", "nusari", "wopaq",
    "enaka", "pofileqa", "uhenaqoga", "wamakemov", "jihadod", "benij", "isarek", "nulufo", "afacoz", "zamusa",
    "ikavif", "bowaluv", "egegivew", "oxefejud", "fegij", "oqekucimo", "urohekoso", "edofabi", "omurejuvu", "izonolu",
    "alaxamiyi", "anoderuf", "exumi", "poqal", "bupuma", "zivur", "qigiholub", "izuwudab", "mizule", "xenuqayey",
    "eyoqupa", "ofomi", "atenomo", "cumap", "pugezem", "fuluyi", "apufegedo", "ujotamab", "ororale", "lulifi",
    "alayeqoqa", "hunuk", "takuda", "yizukubik", "olenow", "ahenax", "webokikaw", "owadude", "amaca", "opiralub",
    "korap", "ahoci", "iheholij", "ukiqozap", "witup", "guhupubup", "kicuvav", "ulututet", "qekuxorub", "ivenahu",
    "katebe", "yavamo", "ofemaper", "awimiq", "uheducire", "tutuz", "ecoka", "muruvivof", "oteja", "qevicadu",
    "cofupi", "adaxo", "oxazagixi", "uvoxafuf", "jodame", "hadota", "saxivi", "uzunagug", "owugoq", "oyefami",
    "wacuhinin", "akatuki", "uwedohu", "fekaya", "osamelumi", "inudo", "ewecogu", "ihozenu", "ojaqesare", "aqiqiyine",
    "hasite", "xasiqiroq", "ribac", "dugipok", "idutuf", "zacuz", "ibegiboze", "qolujumab", "wileyoy", "enufuxahe",
    "ubojejeru", "nitiq", "ikihel", "cosopuz", "epunobu", "kesokahec", "mufukal", "uwizeloja", "nirakili", "hibile",
    "sefaduqe", "vehevigeh", "jejuvet", "agoxozex", "elexa", "ladaj", "koqom", "tomoqe", "fasiki", "wobupo",
    "hevos", "arufupevi", "ifoyafiq", "inorar", "isahe", "utexus", "ratabijus", "ugoce", "nejinoj", "hixafi",
    "yudigev", "seduzucab", "oximogem", "oziwev", "cakuzi", "uqecide", "guqawap", "fevuhevo", "gabitupe", "asarov",
    "ayudezemo", "vibel", "wubuz", "oyeditijo", "exaro", "jakadero", "qafoxoso", "fatoha", "xiquzuzed", "fajusi",
    "cehejuw", "areca", "tecajoqal", "talayo", "osoyope", "ezinepe", "uwuqacula", "ufofobuq", "ucaqegala", "evudikaho",
    "gupalo", "nocologe", "pusul", "vaqosoxi", "jirir", "atuleyoy", "rusosi", "oxivuf", "movadiy", "paviru",
    "kunugu", "pomifa", "yotoni", "vodav", "qexam", "rumic", "oyeyap", "yavow", "xowokir", "avugevi",
    "elawos", "pabaceb", "utumo", "ufoyi", "omujoqov", "kanod", "disejuca", "icetetip", "ililucu", "iluvoveno",
    "izebimij", "lajonaf", "eciru", "noqenowe", "keyonu", "raxiyepil", "lukiw", "gupez", "hodiba", "ukohuse",
    "isaposeja", "fibeb", "izujetek", "iriden", "zavosoqe", "moritu", "gosinuri", "esolem", "wewatuc", "ugudof",
    "ecofu", "erigipow", "adide", "zifam", "jicopobik", "icahahu", "ifaya", "muwiwi", "xaveyovi", "awebih",
    "ofeqare", "apebe", "guyiyu", "odirufe", "itale", "ijeyuw", "iyumebama", "hinefak", "cozip", "ehuzad",
    "uwikemom", "omezijex", "eqasa", "avufoxa", "iqisifahe", "xupar", "sizomu", "imupo", "icoluse", "uwazed",
    "umukijewe", "iluluyi", "ativowad", "nukehomem", "juceluc", "osumoki", "elizuguy", "bosati", "idutomet", "weteh",
    "sohux", "urajalite", "nagar", "gahabozaq", "nejas", "iloki", "exeguziza", "tiwed", "visujuvi", "fufuwime",
    "xofoy", "onajun", "uyijaxoda", "mejoho", "henife", "qiyide", "wirul", "koqide", "kusubam", "pedej",
    "izifewoka", "dayaq", "zelowiko", "ruqarer", "ayelitaxe", "ekepoqi", "sabiv", "repog", "inigi", "xepuped",
    "simikah", "ufamazilo", "aqeqilabe", "exoseq", "ituqih", "ejoje", "hososidob", "ofiru", "cuqawoma", "ofejexo",
    "etapifacu", "dexih", "codene", "usida", "ivagor", "exevi", "nizimeyu", "uwuki", "inicelot", "umimeqifi",
    "foyajoj", "amiselu", "zedekotur", "jalosey", "ocalufuk", "bulilore", "omofamime", "leyefez", "betokeyuv", "epobuxu",
    "nidoh", "vivaruxo", "ruduyumat", "iticu", "adaki", "mumezu", "qubuwiw", "vasafila", "xukubaf", "igifigeju",
    "apadimo", "emixubas", "gexoyejur", "sibako", "ozepuwod", "xepoceduw", "xokat", "sekazazu", "akopi", "kayafojim",
    "gopocuxi", "tukix", "miyizev", "gumeladi", "ebofizama", "veqefo", "ewomuluq", "vupecas", "revazec", "orogu",
    "azunace", "cogorun", "bicin", "isifi", "oxamenogo", "ehedope", "udoveyug", "ledojitav", "jofudene", "lafagire",
    "elefuh", "nacuzah", "uxela", "omuco", "awepota", "hewetezux", "ikuvulin", "exivi", "reguc", "xicuburit",
    "cavize", "evuluwen", "obeyih", "uluhe", "ifaderij", "ehikam", "apuriho", "ipivud", "uteqe", "razojus",
    "domidogag", "xivataso", "jaxevib", "apicoso", "yuxopo", "eyiwemoru", "wubozeh", "nesukixa", "ugucumuve", "omiquh",
    "qikiq", "igiyogu", "jitogon", "ladecawoz", "onokoki", "xorikaf", "ehozi", "udadul", "opezoj", "ikuqigeje",
    "rozor", "furisaxe", "hidecas", "urofimobo", "xonit", "axanucaj", "eqekaxar", "ucacut", "iqipanaxu", "usuvosox",
    "hemohimi", "qoxaq", "ecenapeci", "divemu", "wibico", "ceqox", "laniherah", "otokah", "aqegujuj", "ekizuw",
    "uwecin", "ananomizi", "oyigoji", "nuyas", "lonewuses", "yewapid", "owebok", "puvom", "quyeya", "okiri",
    "oyuqelamu", "ebusezod", "xulamorek", "opures", "lilojohi", "ugocawux", "izederi", "ewovexoxi", "izirosuy", "exonuwimo",
    "voxiho", "idacum", "tipiq", "mewilu", "hizinosu", "ukosupo", "upalaroc", "wikayo", "xukasi", "osadog",
    "isukowug", "fajenoy", "vinayuc", "apojuhap", "kipezuvuv", "otihuz", "uvuxeco", "hihamu", "omutota", "vivej",
    "ewize", "udewel", "zevoqiduq", "uposeq", "irezejira", "siluh", "enoco", "yicazoca", "fuyurakid", "pehitexi",
    "hazepoqe", "oyijepi", "ikosa", "odeqa", "jayudica", "vexocaza", "opufuya", "qovovah", "ikofas", "amawoy",
    "henofe", "aboladufo", "guniw", "kofup", "wozosoyos", "juherumoj", "gewoki", "qumake", "tatefe", "evewenugi",
    "ibuma", "siziqe", "gududu", "icobuho", "uduru", "wisoyu", "tuwecevar", "omewoteve", "ihusulapa", "qoxaqev",
    "oweniqa", "utija", "fedal", "yasekalej", "ifokikum", "yodaseyo", "uludaloxi", "bunahepa", "buqetagox", "ucamok",
    "homeg", "nezusut", "nemunase", "hukun", "enojoquq", "pivole", "ocuyob", "riyorewu", "xoheni", "ubuvih",
    "omibixotu", "kitabu", "uxibucal", "onipalow", "itedulop", "bajeya", "linus", "adulotehe", "xazavoder", "bobedi",
    "exosojuwe", "uzumaq", "cofuvaje", "isiwura", "avozelap", "ewedacuzi", "nihuza", "cimuzuyoc", "ehunan", "ajalip",
    "oniwukacu", "elalis", "mesaxozih", "nuratu", "onomuxeve", "iladonu", "risebawog", "tanes", "vuzesim", "acapuyan",
    "ovezar", "ifalezaze", "xipiqofi", "wezimizuw", "ozuce", "ziguruc", "qokedomog", "horub", "sotupi", "tiquvora",
    "rubaho", "etezajiq", "uyaruqo", "epofiqi", "uxena", "emugi", "fikudobef", "ifasar", "ejozi", "pomow",
    "yowor", "ifopoh", "jagarut", "qefureked", "yusam", "zoyetezij", "diluvu", "lewetade", "debor", "yesijutuk",
    "sibakufap", "odehegisu", "quneti", "yezequs", "anafakaya", "howituge", "abizubajo", "poqoc", "zekiso", "olunece",
    "rifezeto", "abakogubo", "onufemu", "kafal", "bokekenoq", "eriyidif", "zadibukoz", "mamujewam", "eyicixap", "wepatuta",
    "decazuqo", "lebohot", "udepej", "ehoho", "sokohafog", "gipet", "ojegaso", "mokikuh", "homokapi", "opuyu",
    "zepifukor", "vadelu", "pepayufe", "acukeli", "uvuyov", "ivudoqomi", "lemojakab", "tubat", "unelexo", "mewukonoz",
    "amabicud", "eciba", "tetoyut", "ekefe", "waqutet", "bogadog", "ufezul", "memituzil", "efibur", "cuzafewag",
    "metesi", "sihuzoh", "ludokipik", "efasir", "wireti", "axilad", "odupexuno", "fotoqipir", "qavahed", "erepaki",
    "apoxacu", "oponimi", "erela", "edehiv", "qovexi", "obiqoxahu", "ituyi", "hemigov", "owayato", "covim",
    "apeta", "saqeseje", "xukovofuq", "ikeho", "bikij", "ecevazon", "ureziyixu", "bajedezaf", "oxenapop", "ofinajaje",
    "enubi", "elohi", "kebayowal", "tixoda", "uqujabiba", "yiqocore", "guvumeni", "rexoke", "ujelakoq", "erilumul",
    "uhogut", "suriba", "asocohu", "ipukeday", "gazino", "nadabe", "ixifimuwo", "musoxu", "azazi", "dawit",
    "fuduc", "yufab", "itugatig", "xidokubih", "kekol", "izademof", "hunul", "dalaretuy", "ijupinoz", "kakaf",
    "catakotig", "faguyun", "cuvic", "javupok", "nodoyedoy", "veyofino", "buniris", "canifub", "usidivog", "acoxoj",
    "dulemodo", "ewisujuq", "kevibifem", "arehi", "igoxux", "sirololaq", "qalosuz", "daduces", "enifav", "kocazawoc",
    "akobola", "joyape", "azudusi", "obopoxuc", "omujozubo", "ogiweluwe", "iniqiw", "biwiwodap", "qifur", "hewuda",
    "uqesokapi", "pobehiyak", "cakoneva", "nanisiyo", "ememorak", "deriboh", "uguyuxoh", "kayidebo", "halit", "evinimun",
    "alavobem", "piwiy", "hiwaf", "otecu", "epoyupiv", "ifima", "eveki", "uxadi", "kasabe", "avuxos",
    "loxedi", "garek", "opoqiseki", "okusuqi", "suxecub", "uyohux", "nemuyufa", "nojoletu", "qeziye", "varikax",
    "kasisil", "ijucuboj", "exadezo", "tilip", "adamahe", "utenimek", "ofuvetihe", "opozarico", "puyip", "ahilelat",
    "awukubac", "getabe", "rayuze", "goziji", "bopol", "hidepovo", "arela", "exeha", "ifewit", "oceqanic",
    "zotegunuw", "ekenoj", "ceriko", "xowuwacam", "rasosene", "loqowiy", "upixal", "jibigur", "lokeye", "kobuzuguk",
    "suyata", "uxehey", "reramek", "godug", "oduri", "olejanet", "gozijeja", "obezameri", "oxinika", "gelunogun",
    "qoqiweba", "cebaq", "ejetute", "gazegajed", "eyuwidohe", "hasuyup", "favaciv", "uvojib", "xamulobek", "ayimi",
    "olaxid", "jiwot", "eyiruzi", "mijukesi", "ikubaq", "edofec", "uyice", "olixona", "ebejucul", "arilo",
    "dumaw", "dapihis", "xezifega", "ocehor", "julerisek", "amifufiya", "ixoyahe", "nevulayay", "heheg", "acuhaye",
    "gogose", "xicalag", "sekemiquf", "egubaqonu", "aqizu", "lododoko", "uroka", "ohomihu", "rapaxunib", "uholozope",
    "suwom", "awonokuw", "ayenezuxe", "mimuxipug", "ofipigaj", "fibudas", "dicij", "owomarub", "redetuz", "hoqusoneg",
    "asujuyude", "ikefute", "ixodajo", "kupata", "ubediwiq", "pebeseju", "pevujega", "vifuyezi", "piyuyohuv", "pogodu",
    "iwuwur", "jijepig", "umodo", "sehareg", "gumoguxem", "subavoxey", "yevonixu", "kowisudef", "otihecuv", "nalorep",
    "izuqe", "evobedog", "amiwarej", "atoyem", "bunuroqu", "yuxinicab", "yutamabis", "lupecewiw", "vifudib", "voziki",
    "setuzuf", "ifehine", "ihalaqe", "emufusaw", "halukopog", "faruzi", "buxixe", "juwelomud", "oyukovucu", "tijit",
    "rekajusib", "onosoqom", "uveposo", "azorewuza", "ivulage", "ihiyecevi", "iwibeyude", "amilul", "urokilawi", "ohanob",
    "tadace", "xibekan", "tasekepef", "balixoxak", "oqocu", "luhoz", "ekewi", "damigovo", "ezedi", "etenarut",
    "esucayam", "ohacokute", "uwodufimo", "vumapixor", "atovo", "ureqab", "pofisabo", "ahezofi", "odocujo", "cubeme",
    "iduzogu", "ojojix", "wiralek", "ewida", "ojafoqav", "lanoyo", "qunoxuzi", "hohahi", "tavurak", "aliyi",
    "upawaweq", "xajato", "ajitute", "ocunu", "buhojizaq", "tamogariq", "wudaciru", "uqogef", "qarosof", "nixesesix",
    "ekifo", "yijow", "ipeqafir", "ixofituso", "bakejoboq", "oxifeh", "nowozuduv", "etaqem", "ozemija", "ixavuv",
    "zeqot", "iwidoboco", "ciyiz", "lumus", "duqigos", "ululuda", "yosozuy", "efuloziy", "axeniwowi", "qepay",
    "emopeqi", "capagahon", "igotosip", "koteza", "gehaz", "imate", "socuwex", "uyepi", "mupikitod", "vukequgey",
    "sebazu", "eputasi", "vecilip", "nikefeb", "owebo", "zorajog", "unute", "xukogusur", "opecepa", "lekile",
    "epegap", "xipure", "agoroje", "aqeto", "yuyigay", "holeku", "ifiki", "nasisa", "adovufexi", "igovedim",
    "eqemulacu", "ejicirir", "zivuk", "lezuy", "nuzucu", "eduqu", "uzuwutahu", "ixoya", "ivuduju", "hejisuvo",
    "ixipemox", "ulobusalu", "katira", "peluroj", "vulele", "atupo", "maqohedu", "ilikisi", "ricaki", "jetaxoced",
    "agikap", "nequjevi", "oboteved", "acicopa", "duyaca", "dexuvuj", "alofomihi", "bufifa", "ohuhuvo", "igidu",
    "uqasoye", "usohileje", "inalexip", "zageduv", "mosuho", "ezuqo", "lavoha", "ebunujoqu", "nitih", "todenal",
    "gibemonul", "xususeri", "opogapalu", "lolafinu", "avuca", "iloha", "eyaqirah", "yihacoci", "ifetenavo", "ovituh",
    "oxefeb", "idaxu", "egumeqadi", "miqujus", "vireti", "ojoleb", "rusix", "hafafavuc", "zunibacib", "idimosepe",
    "fekavuwuc", "imihupud", "ebudof", "nemiw", "ekomokemi", "wicebove", "peyopob", "evajabe", "niwowake", "qisaxa",
    "cuwater", "nubebafu", "ogeva", "vapuniki", "efeleca", "awehoziv", "vunasi", "ebosu", "abedi", "dufecezac",
    "usabo", "idelaf", "bitojozu", "ufutosi", "cosusalo", "uhaya", "oroyebema", "huseyi", "ekecev", "fumet",
    "obepela", "idoneduxi", "uxamiyon", "wasolu", "ilahuqewi", "etuyones", "fevozuw", "acaxaji", "keyiqez", "ferekek",
    "veziyolar", "metuxifaz", "akaqexe", "uyaqeli", "daqicamu", "itixom", "bipid", "uhadijof", "liwagecal", "uqirocoge",
    "esaremod", "evoma", "ijova", "iroqe", "hutaguw", "seyafimaj", "udewa", "gevecodo", "ukipa", "azenite",
    "ladem", "esokew", "ekogediru", "varibo", "aneqiliri", "ahizijeqi", "ciride", "mehuw", "ujotuc", "xodinan",
    "upoga", "enoxacof", "jiqanis", "oqiguri", "imemijewe", "kepazudu", "geguz", "odaru", "awupavan", "rumiraqu",
    "yaqacabi", "axiqaqa", "qocevaz", "gujowe", "nonahuho", "otucaqal", "hukojey", "yakixu", "lutupuzo", "ejaxev",
    "epavuxa", "uzema", "rafap", "efafafaqu", "ehezi", "esotej", "rehexoxu", "iwuyitiqe", "besurijec", "zirecoci",
    "icejeqo", "nocal", "oxunikece", "libofiz", "wubiha", "lohososiw", "egido", "iburuvo", "ojini", "modape",
    "yopaz", "riqitiy", "yibisoma", "iqoqapapo", "sudenukus", "yisuqocew", "agojow", "upahebin", "yinuyub", "upeyit",
    "ofumuhe", "ekiroyeye", "asusiy", "bekudum", "adebi", "iwefe", "sosetobet", "boqaci", "pocasojuf", "luvac",
    "itetana", "cuvuwa", "uhesiw", "jipaporad", "ewucif", "uyeve", "eruleri", "otaxumuhi", "osusik", "exaguy",
    "xabutodix", "zuqobijec", "ehodivalo", "ekujof", "eduhawo", "nojijis", "bumoj", "efarifeh", "buziku", "sujubu",
    "esazilup", "jasiqajiw", "yisawapo", "afeqohob", "ilesebir", "kanoqin", "rodag", "wixuna", "nedul", "udite",
    "egohi", "remema", "efeqahofe", "iqifogul", "ihogaze", "ofakubayu", "qazaq", "rexotoga", "xebepe", "pewumi",
    "oqofusa", "suyuwefan", "eqehesi", "yiverim", "gepunoner", "ulinuv", "ronuwas", "ifisovinu", "ihabe", "bekiq",
    "itoliz", "aqiyogox", "hoqolodu", "etaqawiw", "pafejolay", "ufiba", "gewofiva", "wopaj", "zobaparok", "migari",
    "ujatevi", "awakavi", "mofif", "bezitu", "zivow", "ocivefed", "forun", "ojuwalus", "icode", "xumeq",
    "vugepu", "jopowak", "adaxazibi", "wevojev", "hefega", "ilatowi", "aqaceqiv", "ofujimu", "ulajo", "equqopu",
    "delekuhe", "uyocozavi", "okekif", "emaqim", "xukukola", "beroxugo",
];

/// Italian word list.
pub static ITALIAN: WordList = WordList {
    words: &ITALIAN_WORDS,
    english_name: "italian",
    prefix_length: 4,
};

static GERMAN_WORDS: [&str; 1626] = [
    "ewehigu", "eturidewu", "vuvuy", "apiriqu", "zayijacuc", "suligugaj", "uxojan", "sukuloze", "edoneqi", "ubikokeva",
    "pekuki", "zexuzoj", "wuzakave", "oviyeceg", "enewe", "izijepake", "odelu", "uxove", "ayiho", "gubayuj",
    "welakuqer", "pekoxisa", "wacalap", "uvadeqow", "qonukizog", "bocinu", "miwiq", "hedoceke", "ifulu", "eladoputu",
    "qaqegoqot", "citudij", "vivaxevu", "diyesewod", "umeveqad", "fajewava", "gakiciquq", "vupazowal", "supolemi", "lerec",
    "eqagi", "piwafis", "xagewu", "puripuwa", "dosico", "xojoqejo", "acuhevohe", "sazekezem", "ofewapole", "funizoqu",
    "uveteduw", "ciqalepi", "ucokemoq", "pabepo", "zazoye", "ehagu", "qozak", "hibetow", "sudutaq", "faqoy",
    "qimupoqa", "basucoci", "segiwe", "danesuqa", "idenerur", "obokihola", "vipad", "vumozoti", "ejupu", "eruli",
    "ofiwic", "jokad", "ahoxeri", "azoqe", "wabovexan", "vakonilo", "aberihi", "metoxixe", "ezejoso", "utubet",
    "uracuye", "atokoyac", "busexona", "bujek", "lokoy", "ejovaya", "xukanaxop", "odubereve", "votejuf", "mofona",
    "tipafuhej", "vazod", "eculu", "uvopewap", "tegonemo", "rajus", "cuhoj", "ibodetam", "eyitu", "sujaz",
    "etoqip", "fefele", "wenixumig", "eniquwog", "kicupo", "qodiza", "acebim", "qusaja", "olipo", "pefepe",
    "tiloticu", "uxenabef", "upuzicoj", "eworil", "dohusayo", "yojeh", "megaroqi", "ukorum", "odujecub", "vawuqom",
    "afupemip", "oxuzec", "uvosusaha", "yujamode", "izidu", "sopuzaqun", "xudoruja", "evavu", "lawotoru", "kigefofa",
    "ogitunip", "etuxo", "etabaxozu", "eyise", "enihame", "omuca", "nelede", "nimagowa", "ehuvogoku", "tumagin",
    "nopaku", "ebilayeg", "wiliv", "xuviku", "haluripad", "fidosid", "ihucur", "alozilon", "bivujefu", "seqaninu",
    "niwumaj", "baxiwo", "okojo", "dupurud", "xupabop", "gakudovav", "vugem", "akixi", "fohitaki", "lidowar",
    "larekut", "ziceyi", "jedug", "kixaveha", "nazal", "jahefu", "jipozuge", "acititom", "eduzukava", "udazeji",
    "wehuz", "lucagicuk", "tihafofal", "erequfam", "ukiduq", "axilu", "apanihaza", "gixur", "ozida", "vokul",
    "amizoyi", "uwaparit", "vozoweron", "bidekofo", "kocisuco", "ucidulih", "burozu", "qumufi", "eqirap", "onopejecu",
    "nayozew", "levoxuz", "ixiquqo", "poxaxelix", "ehuxif", "osiyune", "emecefit", "foqug", "imacuk", "ucoxuneca",
    "eqaxipase", "izuzeveq", "moxem", "ojofu", "uqizeligu", "ukapofu", "odugojux", "jaravepul", "cimuluway", "itujequno",
    "jediyacuy", "guzupag", "ocogi", "lolejihiv", "kopatogoq", "azugicuk", "limikeduk", "omoqeyiha", "ohuni", "ipiyujes",
    "hududop", "pecopujo", "itodayub", "garitiwox", "ozoje", "vikapawe", "gelemivi", "sadiq", "ayapayu", "gowuwa",
    "qunegir", "zalok", "azijeram", "asujoxa", "bupidab", "ofoqireqe", "ipupiqewi", "katifate", "emezuzeh", "zemucipuz",
    "anodad", "aribaye", "ewicuf", "ufequxubo", "nizof", "ilukako", "vapiz", "kowuxojiv", "efaris", "yacise",
    "kagavafer", "pehicites", "hawepocus", "oxaxeg", "iyepe", "jedonac", "ajodanica", "xusaxuha", "hukidup", "ibejixusi",
    "obuboto", "iyikatuh", "yugoso", "wexeso", "igoyig", "puxewuc", "uqewul", "yebokavax", "juwewef", "tolow",
    "utena", "ecukahuri", "ezigonic", "okiku", "azokuhime", "qeruviv", "elubume", "ajihiy", "pesinar", "ugutukumo",
    "buxuvibaw", "cuxov", "olaqot", "zujoko", "pefih", "ulosewuzu", "zimupipa", "isonido", "kanimagun", "onukako",
    "ijuweweq", "akese", "emiqex", "dalugokip", "ekofujag", "qopatope", "yonoqu", "befub", "xudasa", "canarojuq",
    "hixelalid", "ipetutabu", "xujogun", "zigucat", "ugahowoc", "fuziqavo", "fefiwof", "wiyovo", "wasayaqug", "utiliwiru",
    "ovezi", "apoyu", "ihuzeyahe", "yomif", "sakofuh", "pidid", "fotano", "nisolo", "ipawa", "xigipoq",
    "ruhoda", "uwedup", "pabokax", "ulufom", "qureb", "dabon", "obewi", "soxisabi", "zatoy", "bukubosik",
    "awipexik", "uwigopip", "ozihuvav", "vupiq", "uwawodo", "qelav", "agihubavi", "desejupa", "utitomih", "olobadi",
    "ayini", "atufuquv", "cegeqoxu", "qaqap", "tefoxuw", "atuwoq", "epeqasu", "mudir", "bosorur", "retode",
    "tukaw", "ceqoh", "itarozada", "kotowij", "orebuq", "odepahoha", "osijogu", "atamos", "ikesayos", "irenuguki",
    "gejarexon", "gocicuju", "olipele", "ijaxaw", "apikufi", "jutilo", "iqofef", "wimige", "atatataz", "umogoha",
    "imogimufo", "etatepexo", "ularubefa", "owifovo", "xeqafod", "otonuz", "cedupo", "orexecize", "uliba", "ijehi",
    "gugim", "xibebocaq", "yutobujus", "dasex", "pejunod", "guqezupa", "egebisoxo", "ehatahexa", "efiqefego", "alevanid",
    "ekitajehi", "ihifeb", "waxidi", "munuvar", "ekaqedeze", "iditule", "uvovudey", "ukowesupu", "ehisu", "wogivune",
    "zowuy", "ileduco", "ereza", "ekumo", "copap", "jatic", "ijasevo", "valovibeh", "ejamum", "ezuwu",
    "cufezef", "xopulaqa", "usaferen", "kijud", "erovo", "uhofidemo", "oxihoribu", "iwusi", "cubako", "jiyecit",
    "ehisizu", "sifuxodev", "iboyifi", "tolis", "qavup", "gejisahe", "awoyamu", "obapebu", "urabubace", "atexana",
    "dotov", "ifapek", "cekeq", "hamin", "uvoyaze", "ekijocipa", "ojibajo", "uqupira", "ahapapeso", "gitifu",
    "ucejotum", "zexamok", "azisin", "xujolapak", "yufexuxa", "qepojugo", "eromixig", "anipub", "jofuc", "zipegey",
    "yesati", "equye", "tizoreto", "sacor", "wumuhota", "devosus", "raxehalug", "qefayeci", "fasokox", "cofiwopa",
    "nekaca", "bavoxajoj", "lirecuqa", "voduf", "umarosoxu", "tojawut", "iyesof", "rexavuya", "ezihij", "ayiyufer",
    "kudawilep", "deleleq", "qiwofe", "xehacicez", "gujobave", "dodede", "owomowol", "sebaxutod", "ahija", "ceceve",
    "vekosu", "aruno", "romor", "ufazika", "ejeyafabo", "qacicipuc", "mujuv", "bahejepup", "azoto", "domadawom",
    "dovoyok", "izulo", "abalitu", "uqalow", "exifiq", "jusekohix", "qitep", "qopes", "odabuwodu", "unoguc",
    "wevagube", "quzijes", "emofazol", "uqiyi", "anoyo", "iwuciri", "sekorol", "owigitana", "yohes", "izizatuhu",
    "bexaduxe", "ivezu", "rapeyu", "qipayol", "uriquwad", "orefi", "exowe", "aculotib", "ebeman", "kovulove",
    "lezevunol", "kusid", "lumofita", "efidoguhi", "ojotozige", "rarahi", "yecigupas", "goqunizoz", "ohaqoy", "ibatiyar",
    "tanab", "uzona", "fayes", "azafupoji", "oliyuf", "ohives", "wibuy", "peril", "fixesasax", "vejajineb",
    "ufuwos", "ciruw", "cipija", "acopiwi", "italaf", "eguno", "jomip", "midiz", "unobiv", "nisagu",
    "xubazis", "abopax", "akicaqonu", "ixugiga", "ogokopoyo", "adaxug", "ibuyujaze", "rebalut", "epolow", "ubejadumu",
    "obonafife", "itajato", "osiqasa", "dajacexuc", "jujeso", "foxul", "jahuwaxiv", "jutuqoc", "otupa", "hetezovo",
    "jufeweji", "qijarof", "higisa", "votuw", "upeqivevu", "gufom", "ixurufuzi", "ferodazev", "obudelu", "yifegiju",
    "beyini", "rizexi", "ozoho", "ocayod", "uquhiziwo", "pexucek", "uwupexir", "ovoxoven", "otapoluh", "apoyulede",
    "axotojemo", "epacapivi", "yinemuw", "sewakemon", "ikela", "ofivebaxu", "evifeqaz", "nanoxen", "jafubefif", "ximupohu",
    "ipeqoq", "uzadehi", "uropehidi", "fofub", "owazo", "hejajeki", "uhuce", "ozuzoqo", "hucic", "uquvuhal",
    "owasuk", "latep", "guxapidir", "xoneruf", "ofatemi", "ubobu", "kijekah", "bukokohuf", "onitefe", "uyurepu",
    "ovaxe", "parukay", "owokuxog", "guxipaz", "yejug", "lalozepav", "lureki", "zugobo", "tehiraqe", "afedi",
    "ebuway", "sozaro", "ajuvos", "jobase", "kupakiq", "miduge", "copocewi", "haxew", "mutuxo", "mosaqumul",
    "natino", "vakojola", "ocurih", "onejalew", "onugopob", "dequs", "otugiwek", "ofojaxofa", "ovexeze", "eyovapata",
    "upimukowe", "xuhoraceq", "celat", "letezeyen", "zihiv", "zeruyudap", "dinosuj", "figaj", "zupiyug", "rumume",
    "ayadixawi", "udodona", "urexupepi", "eqahaxi", "uluda", "ebeho", "abexometo", "uwife", "ipivejipa", "okomomod",
    "ragacu", "ohejub", "puqufe", "ukuporima", "afasisu", "sipit", "azuxare", "emoqoq", "onirim", "amesecoj",
    "uwace", "oqaxej", "udokuteli", "wepiramo", "elovotur", "avuxepa", "docup", "harika", "qesehicub", "qaquca",
    "dokefa", "usumi", "emugunoba", "udozel", "vepuceco", "ficoka", "oruragem", "uzapax", "roceye", "xezoporek",
    "uzeto", "ozevuqimu", "apayec", "tavituk", "rosohokip", "xetim", "etoce", "pefuyuka", "sexuku", "ukuha",
    "inoqoda", "huxeg", "demuhoyup", "abuxacum", "desusuz", "egevu", "ulujilud", "cipozaqix", "eluzuyan", "ivixudiv",
    "oconu", "buliyiwa", "akoxefo", "woweqad", "tuzifaci", "osorifoki", "ijorodase", "yafar", "tefabu", "oqoqex",
    "iyeni", "tijade", "ocupabup", "felop", "sajapay", "egehil", "rivaw", "ozawapode", "agoji", "icamu",
    "ucetahen", "afozun", "equleben", "ujezo", "moroweh", "iyazu", "ibofirer", "boqefada", "omojota", "ginubuvet",
    "iwanec", "nijeyixa", "sayoteho", "ivimo", "xuxewami", "tibexaw", "xaxuhuz", "foyepaduv", "ganaxiteq", "udusipaho",
    "iwexejobo", "qemim", "verase", "ariqekate", "onise", "elasoni", "onopesuz", "igidimeq", "efekarewe", "xajavasa",
    "exojafi", "arimosixe", "girob", "gosakobab", "okaqe", "uzipar", "ihugimip", "ekaru", "yuwifoxu", "tohatur",
    "ewavuhore", "uguvad", "aqeguqog", "orolifapo", "ecuyiv", "ilixehu", "ubalij", "fufefoju", "oyojici", "asulu",
    "omozodep", "wegik", "olalajo", "ukigu", "ojiranuxu", "ocozucosi", "ukaciwab", "uyesipuk", "ahayo", "itetu",
    "ahecojuc", "zeluwe", "ketut", "qelujo", "liqefup", "osulawap", "ufecate", "kalafux", "ujelefobu", "hoxik",
    "pelape", "hodopo", "equwu", "umucey", "qawese", "gutedoxih", "ikemij", "itatudi", "uweharu", "iwazuqi",
    "omebuka", "telure", "xaxaguco", "winedovuh", "isedowo", "hivufeyim", "akoca", "gawoluqup", "owepokuk", "ubiguto",
    "sodih", "juxob", "ecabe", "omapol", "oyeyiso", "okovep", "arejowine", "uzujuxa", "dikab", "ivugehi",
    "xamodil", "qevawol", "yakiyofe", "jeyer", "jaxir", "qamanoci", "usahoju", "afekavec", "ayukim", "usigima",
    "isexamaci", "kuquw", "siyicuc", "loluyado", "jiyov", "joqiqeci", "ecapena", "eyahira", "ilunofiv", "awale",
    "vebocojuw", "ikabe", "uduhujane", "hikeq", "iliqu", "nakip", "uyirut", "iqakikac", "uxapas", "urasejaxe",
    "eroqeho", "icomaniy", "puron", "averuqadi", "rijonapu", "omuseguri", "ehuvewajo", "ecudujoli", "unoyek", "lazasuke",
    "luyupadar", "ocerica", "ajodaw", "nopexunu", "efofeto", "ojowa", "udojefu", "wekotogu", "cajebub", "pinosa",
    "vosuvah", "purojix", "fanuxap", "ivocuw", "vejomep", "tedinopib", "ohezedaf", "vudamihoh", "ohewi", "urufe",
    "hafoqubu", "ezacus", "okaruh", "ninaxere", "izacux", "vifukeca", "xisoyok", "dajelopo", "sefetifi", "isayoxuq",
    "irucuhu", "jikudaj", "filowatu", "utabuxupo", "cetaku", "fexajajam", "rimahanu", "asaxuqu", "ufoti", "qiyak",
    "cegate", "ruxevo", "fakefe", "ujuve", "unokuf", "geqovuquy", "zubacawo", "fifivaf", "levaja", "mepuhequ",
    "bideg", "layivosub", "ijazaqi", "nogexiho", "unekijaze", "qeqijeli", "mivumimib", "yohibubi", "cacebite", "jogeheken",
    "oseyoq", "holunutef", "ohaboluce", "ocakoboc", "dexafim", "gatek", "nozuluxoh", "dahaku", "robak", "rutodar",
    "jiwem", "giwicuv", "giguyi", "hokedas", "bakenezex", "eretimazo", "ivuzi", "udoxesi", "utelavu", "omocomu",
    "ogakedo", "haluvu", "awexe", "otara", "omude", "deciso", "ekoriru", "duloje", "idawezika", "ufemegu",
    "wuhocozah", "aduwov", "yubuzov", "arisagoz", "lavowame", "yadefocu", "arosalu", "egoru", "huzenuk", "apoduciyi",
    "ikalula", "zomigeq", "hukozew", "bukahacu", "gugayi", "exova", "sabocok", "ejidoqih", "luracosuq", "yoyipetoy",
    "dofaguqe", "kumepa", "qepekem", "peyijem", "ekewanuw", "wiroko", "cejajo", "ixavutohu", "agipaz", "roxuw",
    "uzoho", "ayupinepe", "nufey", "ojacuc", "ohabaliba", "dusimiho", "aloxudog", "jujisuy", "debusaweh", "xotelofa",
    "kaloqice", "pekujiqe", "nidilic", "nusutipag", "uhabowa", "fedokot", "tikom", "ipunoduc", "emoyecefe", "qazosusa",
    "debuyoh", "ikagavoqo", "keyece", "lakadofa", "huyoture", "unewat", "oboho", "goyof", "vivuna", "aharufit",
    "hiceko", "icojeq", "fuqejayof", "ewonuvuna", "fojalis", "unewef", "uropugohu", "mukijix", "odopugok", "dabedi",
    "ifawazeme", "debapezi", "xidonolos", "johehoc", "mekosa", "igiqar", "kapam", "haveva", "zedutewec", "egiqigur",
    "ohovey", "petuhi", "muvihure", "wadejamam", "qawunono", "oxahi", "orepikovi", "uqaqomog", "wogupusam", "uhomumek",
    "uxaye", "ijicel", "ijife", "ugihokiha", "podemixug", "dasacumo", "icohoziqi", "elamagoge", "zuzokun", "iyuniku",
    "babeyiha", "izica", "weyudo", "anotoju", "wuyeyaz", "qulaboci", "ujaluhex", "ibasebal", "upinoresu", "uhako",
    "xenegobi", "zoxeji", "zuduxeko", "qefahuheq", "oduminul", "vayaxi", "reyom", "qezecix", "vixozo", "tosubipox",
    "uburo", "unimotaz", "tucuwu", "duhofu", "iceloy", "wowaw", "erulaluf", "ixuloc", "wogaloj", "vejicuvuk",
    "qohek", "cecemasux", "pitin", "idizuwuqi", "ezezim", "gerunici", "puverec", "poyaxer", "pogox", "adekaquwe",
    "leriluze", "hewogike", "ibutay", "lezava", "uvohamol", "ogega", "tohatoqu", "hovoqawo", "avokovinu", "rifore",
    "uyiqi", "pikidal", "isedikuje", "hegarix", "ewuya", "ovekuyiqo", "roqacupeh", "oboxiki", "ukoniso", "ecatuq",
    "acalamu", "omica", "hipicawu", "tunep", "ilunofaq", "zawih", "wuvawube", "eguxacot", "doqevo", "ebicebuv",
    "jejabama", "navaqa", "bucavolo", "mideve", "epudog", "epuxuladi", "xidoxiji", "ogewi", "ugizowo", "ajuqo",
    "kixasitu", "panej", "nonakun", "qoleyaj", "odepayir", "ofiki", "obagomo", "ibikejoy", "henaxaq", "dutiq",
    "lejos", "ihemikav", "soriza", "usuriki", "nutoq", "fopox", "gubikip", "daruyaxi", "bekokarug", "akujiki",
    "aqocabibi", "tuhiriju", "amegiga", "ihuboceq", "ixebo", "evegare", "ohupota", "avene", "ocevezuwu", "vegafucos",
    "hupicik", "ewipub", "eqodoy", "uyetoha", "ocuqot", "idokerego", "ozisom", "ariwokod", "idabemiv", "hedipetub",
    "qededako", "ixukebici", "ojumekozo", "ihojuvi", "ikezuku", "laholakuy", "oqokur", "hipedaqe", "fumiyu", "aqusaqim",
    "udaleced", "iqumu", "zicomofe", "betib", "wurasoq", "onamoca", "yozerigi", "nuboj", "picow", "giqonum",
    "ifinotelu", "ewazoru", "oxiwam", "otosafib", "xofiqoca", "axatopu", "ziquv", "qonene", "wugacud", "ewowefot",
    "zotulafun", "azonale", "ojaya", "gidojumes", "foxaq", "wabig", "uqudene", "okufa", "gutezuyu", "enecatok",
    "firate", "ezuyawa", "ozayik", "afuci", "hosabeyi", "beqet", "icekub", "oqokugomo", "ulekeweza", "nayeqem",
    "onuwuv", "ivesidu", "puneqixoy", "orofobon", "itozutahe", "eqewesa", "zotuya", "obocofexi", "jewewacoy", "oyaluboh",
    "igamowaqa", "vurekacu", "mufit", "romese", "cayup", "yuzitor", "dobor", "movujejo", "egifo", "abama",
    "xufez", "eduwi", "yavej", "joyekujed", "idagesaf", "ogasubuh", "igiwibawo", "azezoci", "vuquk", "azusidut",
    "pimaqufuv", "iqizox", "afigabiku", "udofiheku", "lohuduma", "panam", "adotur", "ajequdid", "ipowe", "iducuhic",
    "udelataxe", "opequro", "qifaqohom", "erigib", "jovekobe", "vitimigec", "uladapiy", "ivetuhu", "xisico", "boxobuga",
    "afodi", "otixof", "adakobeb", "zatalusu", "nodesu", "dakipiso", "lixofuwov", "betus", "dewutetep", "vivucinus",
    "idumeke", "edewopaqo", "atovolula", "olonebeje", "esopipa", "uzudedoro", "eqovoduy", "jilujone", "hiduqococ", "cupove",
    "awolumu", "likigofuv", "acejabado", "imexu", "uvofex", "oqefu", "udesu", "biyura", "irijojayu", "alofuyu",
    "pohane", "udekaxux", "eredebec", "unasiveq", "daqajidew", "pawahixo", "ayuquji", "rugoca", "uqesiq", "upezovefo",
    "amuray", "momupo", "famarad", "erokal", "gumajiw", "oxazijoy", "ulijoc", "ewoqoqok", "nowijape", "oxuzuyuji",
    "amajoka", "ahage", "nabuwak", "otohofaro", "hudife", "efegu", "raditom", "wahad", "hosahi", "mojuwaw",
    "noqoyo", "ikikapex", "edamumus", "asagoqev", "bidelebo", "deruwuv", "wazesiba", "ikado", "ibohogo", "iwunim",
    "neduhub", "ocude", "ojisul", "ofedafog", "pasibirin", "adasizo", "hobagi", "upihafu", "uqozuv", "eluse",
    "xuwaf", "vuwotigil", "omunuteyi", "lepahazew", "obeliyofe", "oyofoner", "gedadu", "uvihecog", "odipi", "idesuy",
    "uwukunam", "yisirezi", "cihebaq", "inusoha", "uliwusiv", "kasog", "xozuxut", "uvupawuh", "patoca", "rireju",
    "zegaci", "ezafef", "tokope", "vokagohu", "uvesojoq", "mumiz", "joyeqaqi", "suyuj", "emibatut", "xereles",
    "esifibiqo", "hative", "butisame", "ehelumi", "batupipob", "ezecexej", "jeyaweq", "odosarul", "useri", "apiqedula",
    "amigamav", "ubevuwahe", "vegemip", "ajuziley", "feyidanu", "oyutixiwi", "udefake", "zayina", "qihuzu", "wayitis",
    "meyakep", "erote", "facuy", "olofiteh", "qamib", "oroxuri", "kugivoho", "ixuxad", "ilonuvaga", "ukibonibi",
    "jiwugog", "falukuto", "tukola", "xekiw", "ipale", "liyaya", "icatib", "izusac", "kenexagol", "kanerur",
    "raneto", "awobamovi", "pexowolaz", "veyew", "izomu", "uteza", "azaza", "tutiwosiw", "viniyoboz", "yuvozij",
    "qajufenoq", "jerijoyi", "osolo", "gayeva", "ititetaj", "umisa", "jupekayo", "taxucocu", "vugif", "ejimilelo",
    "eluhaxo", "epiyay", "xoyejej", "abifuvun", "tumilur", "evujep", "anokezako", "awagecigo", "macegone", "atasezo",
    "bajodac", "efupihi", "mewema", "huqep", "fikimujoh", "fovulurax", "owoyi", "acara", "apacej", "goligu",
    "utiruxum", "decijo", "aniqoxo", "asuyi", "pufat", "atusap", "opogozuq", "ubajufu", "ewavufej", "ehavow",
    "gumap", "ufute", "ikiwivas", "ovucomul", "edijex", "ifokizut", "owobid", "exoneyuxi", "kesut", "oqociye",
    "reyotijex", "alora", "ogafi", "ojiremu", "liquzihu", "rehaga", "zajakuq", "xagor", "uneve", "iyixe",
    "tizuxer", "egicis", "zuciv", "doceh", "oreqideg", "odaxilo", "ovoja", "petura", "ovafovuca", "uviquq",
    "utibu", "jagok", "ohinimuse", "ijeziba", "xuxiw", "nosef", "elomeba", "cujene", "ukeko", "acigi",
    "pofiluse", "pawatede", "unozazus", "dodalad", "oboremo", "ehina", "daluy", "emevocako", "taliva", "ogoxir",
    "hukaji", "urafe", "matavi", "uyenajoq", "wutot", "iyekux", "mopijexal", "acikida", "ganadeyup", "bumex",
    "yotoqehi", "lesiloqax", "gevudulo", "iyedite", "ukacohalo", "ifeje", "qexexiq", "baqag", "uloqonu", "zicinaruc",
    "onuwuf", "utetufema", "eluxayo", "enehog", "esenufona", "esixeh", "pohaqo", "ezocey", "faxicoy", "ezapure",
    "xuleriwo", "deqakuq", "axudah", "wuhedir", "ujipu", "gakusage", "ujuni", "azamizic", "jopoj", "ezosobo",
    "divosak", "requva", "oxayipug", "nubukima", "uvipomu", "avuto", "apicik", "maxuz", "iteji", "badotisih",
    "fucabat", "ufapewuca", "enulub", "valapiso", "futom", "iyogeti", "ecofurota", "uhire", "bezex", "qubap",
    "axorif", "seciweg", "sepodoxuy", "awicu", "buvoqayo", "kolibe", "anikev", "tolinap", "onudoji", "etaselo",
    "otaban", "uzakax", "ineza", "yatipeh", "kasase", "raquyefi", "adixelu", "ovodoji", "irovi", "sezoxum",
    "iwuqe", "eroyodu", "ozezok", "ofaxefux", "lelexof", "ehakoda",
];

/// German word list.
pub static GERMAN: WordList = WordList {
    words: &GERMAN_WORDS,
    english_name: "german",
    prefix_length: 4,
};

static DUTCH_WORDS: [&str; 1626] = [
    "oyomexuh", "tuyameben", "biguz", "otune", "leqohik", "zixuyaco", "exuwesati", "atucuwuhi", "uxeriyibi", "omoviyud",
    "exunaxi", "judemidis", "uheyagoc", "mibanab", "kihurej", "vefasodi", "etibipemi", "yiqeheye", "lifelafol", "agisidaj",
    "uxukaw", "xojovina", "adebi", "nazahite", "nutaw", "onaqut", "ajagigazo", "eqokaqiso", "fihoked", "iqomik",
    "mipizuqa", "lukoje", "fijola", "buxezo", "kayivunu", "yosodi", "ikicalon", "iguzayep", "imowow", "voriwahu",
    "erociwequ", "hilizadov", "henoyuxoy", "teweqab", "liyoyiri", "qojayuj", "eliyexo", "sajuzek", "culuy", "ofemapi",
    "zupasase", "ecimula", "uruyo", "zelaro", "onaqid", "miqimu", "cuduc", "ufoyukuv", "pumubedi", "unatedoci",
    "ovupevom", "guvocub", "fiqudul", "jafasece", "zuvudu", "oqucegeho", "gidoza", "ukejuya", "kocafa", "hifuluzu",
    "ewomez", "enasu", "puqad", "akezigoci", "ludujiqi", "ofukef", "lojitebeh", "halevu", "vacol", "ayoriso",
    "kasewara", "ikequn", "vafakuhil", "vewino", "valila", "uyulu", "irelevoru", "ayoje", "ipeviwo", "obebi",
    "focamut", "avenelek", "odufay", "ewurep", "odomevako", "uwaronido", "onamiroj", "upeduluy", "cikuquj", "yepohop",
    "yeyeho", "vodik", "farazoco", "uzafatodo", "wusuwudo", "erijer", "oviqedoy", "boniburok", "tupiqaki", "nahen",
    "ogeziyeqe", "caxoxube", "ezuxuximu", "exuha", "osoguyil", "aleconaha", "ederubef", "hemucug", "akoqi", "citize",
    "ehogebiqo", "aburotih", "uhogupona", "jevehu", "zalehejeh", "viqeco", "upemani", "webaqiwex", "guruwuyif", "isumide",
    "azavifik", "duluyu", "figefej", "duwoj", "agewut", "fuwec", "kimosa", "nayobunej", "ahihuvac", "ekeri",
    "pipuwepag", "ejubivi", "curuvele", "ozivox", "wuxuy", "uharave", "rumesayez", "fazagip", "qefiniwu", "xugegu",
    "pavopuya", "umoqirur", "yulucufob", "aliraq", "dexuguvo", "cujuzup", "zocaqito", "epezuzo", "magahugig", "ugosiguv",
    "amacireme", "aboyay", "moyika", "rosuxefag", "qibucinet", "ruxap", "itoqahoqo", "uzavuhe", "nutodiq", "kinulixu",
    "igariyiqa", "otemoqi", "lihate", "olatuhequ", "qusanehoj", "ixuwoluca", "ubagaxum", "nadowate", "usezamez", "baguz",
    "hoxepoyi", "weqiram", "hifusaku", "exabu", "secibu", "fokixetub", "febezeveq", "ufiborud", "unexafa", "doyise",
    "gafuralor", "xajawo", "ogiyic", "uxebimiri", "doqibikut", "ebojo", "ifoset", "qemadicob", "ayafo", "opogirobo",
    "cejocoju", "cehula", "ovelixax", "anixe", "oyufa", "qevadiwut", "tisusemu", "qewiheda", "jogivowa", "fomeguv",
    "fihocole", "equteleqe", "ujuned", "yeyodepup", "yuqel", "afumag", "idoyepine", "giziv", "pinequ", "pujaciw",
    "ogakik", "uqavi", "oveleq", "ixosulug", "apobu", "ateqipew", "tajotoyuw", "uhadosu", "osatu", "eqevezu",
    "ladamedim", "evoqiqe", "ajebecovo", "ufuta", "iqaniwu", "kujet", "mozevoqu", "atinibe", "uyufuh", "aluwilimo",
    "ivecil", "yoqucav", "bizaxaj", "lihufez", "ihodebi", "uwusero", "oyeyoju", "bixibafox", "nomisi", "uhaveweq",
    "igoqigade", "akuqem", "zaxiyov", "ijemat", "hipogi", "umuxu", "zepudute", "ajisuqa", "ezeqid", "ugoku",
    "okivonux", "sufagayav", "fuzeqefo", "nitivaya", "qayaxibiz", "dudumaha", "ugiqiruz", "udoda", "tuhuj", "jalegunij",
    "liseluq", "cigefuwa", "ojohofo", "ijozedaf", "dewawac", "igefevu", "asamadaw", "ravohe", "poguhilan", "ixepohoc",
    "zadija", "sufel", "olidevivi", "boliner", "ureboweme", "ihelet", "enowuyago", "domifesun", "vajap", "uqidohov",
    "guxiporar", "lozosaguz", "acezaxi", "jerus", "mafopab", "utoqise", "okigajib", "aqaye", "fibod", "ogagehufu",
    "nozuho", "ozajifaza", "eweropija", "bisilaf", "cifecohif", "everid", "utobulu", "yakocab", "avabeku", "iqayuz",
    "kenena", "wukuco", "fasukipiq", "epizikot", "ebedufane", "mafeto", "mecit", "luzazi", "reyipuvaw", "jamis",
    "rikasesel", "eyuyiheru", "atuwidiho", "guvaki", "uwukisob", "xitefece", "yiwoh", "kewir", "zigije", "tuhevad",
    "vebize", "afojiwi", "ovipogamu", "ubore", "xehanake", "oqiwofih", "uzizisuwu", "dijisay", "kidak", "acetid",
    "ukiya", "bufegevi", "ugatateke", "otirabav", "rinosey", "ujokusito", "bober", "uvapiwin", "usipaqoka", "nokesu",
    "icifu", "weqiwix", "eyufi", "wonedali", "ivabatir", "ofohitim", "oqomid", "xivoce", "hajafafeg", "asoha",
    "uneqo", "edopupe", "gotifimej", "jagad", "aqiluber", "fadono", "ihutej", "pivalugob", "busuci", "bevopofur",
    "ecake", "uyexijoz", "mesuy", "ukavub", "itoduh", "hakew", "hocale", "ivebo", "iheyewi", "uzejotoya",
    "iducewig", "fipivug", "padosequn", "xogovagur", "inevuk", "fecehob", "omaloxoy", "kisivatol", "igenu", "elumelo",
    "mimob", "iyubar", "ibofidoj", "zosabuwaw", "xonajoqi", "ibaqayifa", "saxavezir", "alewiqul", "uyaya", "hopab",
    "ebecokap", "agamejat", "iyudewih", "ratojo", "mezuziq", "hacada", "xegexayok", "ukogay", "socuzoyaj", "iheta",
    "lanifikeq", "heqij", "ijaciwoxo", "xekozor", "eriyomo", "ubimajas", "haxoqu", "poyava", "sidifahu", "amahexagi",
    "lomekih", "ejusimu", "axalobik", "etayaye", "iquhitofe", "oxopefun", "canike", "bokubazig", "rolukiru", "ulenugiyo",
    "kovud", "qiwaka", "tisawug", "eyeyofoba", "uquci", "axecipet", "otewa", "midamera", "ikapi", "uqutow",
    "ahuyav", "nudaji", "olajoyit", "awowiyulo", "ruheqo", "kewodayex", "humunari", "efoyosuq", "judoda", "ravolic",
    "opifilu", "atosam", "bapup", "ateke", "nakeh", "viyen", "vuzegu", "epofodiv", "egexo", "mehaz",
    "ahayutovu", "nolenu", "ewuwubo", "vutudig", "suvabelup", "okutaseb", "bodezeweh", "kunetime", "ekiqazura", "omuzob",
    "sidow", "vilawobiv", "ayeba", "udubaf", "pahati", "uguqafaco", "afaqocup", "ikazaxesa", "uqiranuw", "oviqe",
    "ixovimuvu", "ocumilexu", "hodicofad", "jobavunov", "uqehihan", "ravuy", "ejumaf", "jazutuna", "uhegetiwe", "onoresuw",
    "tesakol", "iborojat", "exumak", "qebeju", "ikoba", "tijapeso", "ikoresin", "iwaluzu", "lobava", "qomevewa",
    "kesisela", "ubigotiti", "epuma", "zavexasi", "evaqi", "ojifumiwi", "edajogisu", "uxaxo", "iqavaliqo", "iqikes",
    "isifaci", "exomidux", "vujiwo", "wugeyad", "aroxexasu", "kexire", "ezojun", "uzejuj", "sijohafih", "iwohelay",
    "vibafuz", "tuwacuzi", "rakax", "afomiva", "iqazanaya", "gopafivim", "aduxowez", "mifolec", "noqowen", "osajo",
    "isobexah", "pitajivu", "dadezi", "izofe", "eviximave", "kemuci", "emadaqeji", "ditisexu", "cuyoqeze", "comoxu",
    "wonugina", "irikage", "gicage", "omiriro", "aqeyazij", "gejof", "wotiponu", "nafeloh", "hubarem", "ijodod",
    "kibih", "gutego", "onipaba", "gisav", "uduji", "ibabeg", "navased", "pajixoxuk", "ezaja", "sonov",
    "uriwetece", "hiyus", "naloh", "zuloziq", "ofawuziz", "hiliju", "ohedaboc", "marej", "xopim", "aqekehumi",
    "yaresokin", "bedip", "erunonafe", "oyalay", "kezala", "efunivok", "irilek", "efipeki", "fubixigem", "uheqepes",
    "uhabi", "ivodele", "baligexiz", "aqenediwe", "edojuru", "eyowib", "gazigo", "marisopul", "anatiy", "ucukuvuge",
    "sahih", "cupexayev", "edaqozaro", "gabeh", "apotupi", "fitecule", "iwudacek", "oxove", "fixezawi", "tadon",
    "woras", "umacafogi", "zakigoc", "ayuluwiv", "ewatuva", "buwezedi", "xuyatiqav", "owimifor", "ejutatim", "qesofolot",
    "ayifepiyu", "cugufeh", "gakafi", "useqefalo", "usabugi", "osoqofu", "tepeha", "diranu", "ixava", "cegoriyu",
    "wedununi", "legorase", "omowekugo", "wuloruqo", "avijavana", "molojuhaf", "hibiqa", "gefeza", "enase", "obuwokek",
    "xehuququs", "diway", "adirohad", "qigagu", "hacoqek", "wedidati", "urujez", "jepalik", "tuqefu", "junusin",
    "emubeti", "lujuhah", "kiliyuhi", "ecece", "avonit", "abavu", "zihakejop", "ahili", "aqorejan", "kecinixe",
    "lolejiku", "hageji", "egekiti", "temub", "oheke", "evayi", "gafilunu", "exureb", "fuhuh", "vafida",
    "kezukasuj", "exusatunu", "otinuh", "qejaj", "eboqa", "oqudinin", "ayenawu", "kaxup", "odovi", "behekex",
    "duyufos", "videyoq", "oqefacuw", "zarusib", "ogiloni", "ewunedoh", "uwaxabiz", "zevake", "ropoceko", "peholu",
    "arovul", "eruvi", "raroqev", "enijijuk", "jopeha", "yebepuv", "upayatole", "erevofac", "adelugij", "bupiyuci",
    "alopu", "puyugici", "usehujoyi", "ocolibew", "lekuli", "jewaxe", "imora", "ekesezoza", "teqitabe", "urokug",
    "osatayafu", "rawisat", "isijo", "esuwu", "kuzefise", "jujodad", "higisefu", "qajiso", "niyig", "isede",
    "emofa", "aqoma", "ukakol", "zukijig", "jedebu", "cecijiho", "nurad", "azuveroy", "igiqi", "axijulu",
    "noxehetim", "ekiwuzo", "acubuyu", "hulox", "ugulam", "jicuna", "egugubaf", "raduhi", "joduc", "geyir",
    "muxufeqo", "fedoqoku", "gizider", "yawureyo", "oluqeg", "hebureka", "kibamab", "sixasoko", "uxiku", "cilusiti",
    "inuzes", "egalasoya", "bufejotu", "zumagap", "aguvuw", "dasipi", "adeka", "eqafiwara", "ahanap", "covuzejen",
    "ujewer", "sahuhas", "susorebom", "asifo", "mefasase", "adapacuso", "omuveziku", "ilanuha", "ayerak", "zicaduni",
    "ogiced", "vudico", "emeqo", "akice", "mimila", "yamijad", "goduteb", "ujawuw", "zahepi", "bimilajut",
    "azuta", "hifafid", "ugayibig", "etayasiw", "betima", "ekahulox", "mezoxu", "onavi", "xomajo", "belosuki",
    "aheba", "tusoh", "iwujine", "ilimuxe", "uhanodor", "juqobi", "jariq", "xokiq", "ewihuve", "tunay",
    "bekogogut", "icoquqevi", "ogejap", "hokux", "ibevi", "befoc", "umocewisi", "zezuh", "xupunu", "warowuz",
    "abevog", "xowenara", "lojah", "ekigid", "uyatof", "karisubu", "vamacu", "asixuh", "zinayidi", "xumafix",
    "omuto", "rutevuyuv", "taduzuveq", "iyemapogo", "zezayolet", "egefuxeni", "oxeminoba", "agiwoti", "rebonaya", "ofozozoba",
    "vozuxoxax", "goketaz", "tuyafugic", "oveyuve", "elehu", "uvevewo", "dapatup", "boqas", "wedepaxu", "revorov",
    "abawiripo", "soqovewe", "alozeqid", "ewogey", "akibek", "ramuse", "odino", "edawogez", "ejuyuy", "rucizugi",
    "efudururi", "osece", "igewum", "yedime", "fulonebu", "olipus", "xiduq", "zolawote", "codizitu", "nupetuw",
    "elavi", "sinifa", "etabot", "livaharu", "bufusok", "dirus", "docutu", "wikisek", "qapedaq", "qeyaseta",
    "ahopogo", "fudujep", "adica", "oketufi", "lusuj", "goxiqel", "wevohemid", "awusegu", "laqibap", "rosaxex",
    "wawiqayu", "howisuni", "lijofo", "nidoya", "asamutab", "henaqaq", "vuvapayis", "fozoj", "esiwi", "malow",
    "pumatub", "elapaqalo", "iyekokoq", "uhele", "uhiqukam", "niyudegun", "ratesuj", "runohut", "micoto", "pemusiwo",
    "sonawikeb", "paviva", "asufa", "qacufe", "zemusin", "tinadu", "tunafego", "ilopepi", "qudos", "cogac",
    "ejasuvavu", "suwerevij", "seyoleruf", "zitupaho", "gegiyope", "botezugu", "faruz", "efigadufo", "usumew", "ihuqu",
    "zimeyu", "salimot", "adumofe", "uromotem", "inolawowi", "gicasage", "tonezuhan", "zuzuxo", "fosawaqiw", "oladola",
    "omiyesa", "ihexobojo", "asikini", "epuvige", "agaxag", "wapesi", "noguxeli", "ubicug", "nariza", "ekefeyu",
    "otiwuki", "osibopum", "hunupe", "rayoxiwi", "xiveyoy", "sajuzahic", "vowogohe", "ocupexoq", "migetem", "dikoha",
    "ohulubip", "teromo", "ogola", "savoro", "suyepat", "yobiqek", "afitel", "eqidokuto", "upamu", "axewulak",
    "icagatova", "enagaw", "baqiyavex", "ocukij", "ipozi", "idoruf", "osale", "inuloqad", "ukoyimege", "totokoxuv",
    "icujujava", "ilewid", "dawuje", "mexewaxek", "egodumo", "qexehurof", "guwihera", "diquhe", "kacex", "gisaf",
    "apero", "hawowa", "dilox", "sezut", "luyusoku", "oxuyus", "gazomuj", "yaqexade", "uwovafac", "befoqujog",
    "ewoluzem", "ezejem", "duvubo", "nifore", "ocaci", "yihas", "elevusux", "tewag", "kepakap", "minix",
    "sakeduh", "cisovey", "ivedileq", "okokozi", "sulena", "ilezi", "setabiv", "uciyiqek", "iwewafiq", "aciva",
    "gugoqagu", "makoyiy", "sozaxu", "javum", "ulaxez", "anaxoc", "hijizaxu", "hitur", "aqedug", "qavik",
    "ugovenoso", "ujegeger", "ivecubuc", "finigamor", "holefax", "nucas", "fifixuyub", "tibicuneq", "fakukum", "goyuqu",
    "ludocice", "ocubor", "rezam", "liqexocu", "apofudal", "obizaman", "iripu", "unapuh", "eragus", "enifuc",
    "uleqosi", "ifewo", "ofunim", "ixuyi", "ekeyov", "butom", "arawek", "fisuwavi", "ixoqol", "ajugoridi",
    "atuvisaho", "evucugoze", "xutohib", "zuzumovol", "bugohajor", "fururaro", "eyecimice", "kodon", "fudox", "cacimuca",
    "upofeda", "omuyeyoj", "buqabu", "hudujehi", "ekebix", "emozu", "ocisip", "fopuvel", "cuwedo", "ivafoyehu",
    "wepuyuxe", "dujicel", "levopanaw", "miwopaho", "covikif", "ucokuw", "juwuq", "erohowu", "qikesorig", "ekiraqi",
    "nenohex", "amowuxuro", "ojovic", "ebiheboru", "govozehu", "jiwutola", "udipegak", "urehaz", "akilal", "japumomol",
    "wajeje", "ibukawafi", "ulekobet", "jubeluze", "iheyi", "lucisuyo", "usebebexe", "copuc", "isuralesu", "wiyokoh",
    "owuyi", "eleso", "etatiwo", "pagay", "piwilu", "zomagetim", "ejoviwiyu", "onatin", "ajineg", "yoqekutul",
    "ahejo", "ahimana", "awosoci", "ecidareh", "oyekeq", "nuxuxel", "wekanupoz", "xibiq", "hipocif", "atuya",
    "ezewajos", "esuguje", "conatidob", "pobexaqev", "owoquk", "ogacuduk", "esidokive", "odecewoc", "edeluyes", "weyanat",
    "zopone", "pojeb", "bajoso", "gawuw", "ivopur", "evudu", "lojifufom", "edororeg", "rutufuy", "yovovu",
    "fuxeqom", "xoqig", "uriheju", "tawitucab", "uvetupu", "wesax", "wukazota", "ewatet", "acigeqeke", "fugired",
    "nojakid", "ofudafo", "edagaxuv", "puvodi", "utitigafi", "hotuvoda", "fugowu", "dedevuk", "lobusa", "noxureke",
    "enuzomi", "axoxex", "elikokawa", "agexu", "yatuha", "puworobog", "opisexu", "oqijag", "ebiju", "otuqaray",
    "fihoq", "eyubabo", "tozete", "alawuga", "fowixanem", "exojuwoha", "ejicuzoy", "gubejep", "imalalu", "ohuze",
    "mowefopij", "epukejavi", "kewiy", "ojevoce", "ekujiw", "josuqemik", "avohoyiv", "ejogapajo", "munugiju", "ayuheluw",
    "macuz", "uyohirije", "dudida", "pofihohi", "socubo", "olivi", "xopiv", "ehelin", "osicu", "iyakeda",
    "eqivahev", "votes", "fudafivep", "duwololu", "ododepu", "yagob", "lureza", "olufafa", "lodevi", "owotul",
    "moropodav", "ocarabun", "vowey", "duleyo", "edomeri", "vipos", "mexoxim", "osevalale", "vaviva", "pugasenu",
    "sutemosag", "enabanu", "imodogasi", "enepeteto", "zohus", "qakec", "qumakex", "ovabidire", "suteyed", "nadaguf",
    "aquqav", "jiregubaj", "uhovuduhi", "aruzopida", "adomef", "iteqeg", "isayocav", "govezoh", "hujacejiw", "ilenaziga",
    "ipeqagu", "ekidejik", "bakalu", "vuyet", "nocehig", "petucos", "gaqay", "rurirocin", "opedaful", "elirul",
    "dequvih", "agicecu", "giwiw", "vetefud", "luzino", "gaxudajoj", "upudebaho", "kidoyove", "yadubib", "laqig",
    "lekisevo", "okavul", "latix", "rapaxe", "acalo", "elene", "ilehu", "cezenoju", "jitav", "gedoqam",
    "oxeduxux", "jeluvena", "uxakivof", "wegeju", "ohayijig", "uqinad", "sumoric", "wireq", "lawiqit", "apajucaza",
    "batiz", "ukopatew", "vacenudo", "womawip", "oyewufafu", "kuxazac", "itepe", "emaci", "fimax", "katopehu",
    "yaqapebub", "juwux", "inasahop", "subaveq", "ejugem", "ecojudeye", "imusokay", "bumali", "motogolug", "ucizi",
    "fegicaje", "xosuve", "awonemiq", "onuxa", "asabe", "ozuxiz", "ohofikon", "rejif", "unacat", "gopaf",
    "imiloraz", "jemiladex", "valikere", "yoqeyeti", "exesinow", "ihulakas", "uqutupezi", "ogoko", "iwaxoyaq", "ozoba",
    "olukuqo", "usamowir", "rikurije", "gepepif", "uzejatujo", "ohunay", "osezod", "umeniwal", "uhecopige", "uqakucog",
    "avanacav", "upumaqope", "heluxaya", "cemimuze", "unamegut", "vubebi", "unudutod", "uyapi", "idizi", "vayimon",
    "pusiqugid", "timoralum", "kuqoyimov", "elariw", "zoxuziba", "xuguleza", "inoyoma", "enahuniw", "anicuzot", "uvezut",
    "oxotun", "olequl", "zovedoyo", "alosopafa", "ezitecigo", "uyiqof", "orojub", "eyura", "kezeji", "ovokug",
    "ageva", "uyomilecu", "rafajiwi", "mihavar", "ijesar", "newuzav", "ocapobi", "alulenol", "tumema", "ecuceye",
    "uqusalehi", "orosiwisu", "lohoc", "ohifapa", "ebevapo", "pokosojo", "isukoqaw", "laqosanaq", "ubociw", "juhuhevom",
    "petipiso", "abecihagi", "zisiri", "enilog", "iqaxijoki", "osaqiraga", "gakeyo", "tisuv", "pimoxi", "tuhacof",
    "tuwubamu", "ikepoyite", "ekodoma", "hejutuweq", "rekedixaf", "jeconeyif", "xokupa", "pedahod", "esokim", "ilatiz",
    "epexagaq", "ajamil", "tizudel", "wojoy", "owuboyoc", "xeninixir", "lipis", "ihonaqeyo", "eqigu", "ofaqoz",
    "ofusi", "iwuxo", "iyene", "caxuy", "rosibih", "judihex", "aziqi", "bowecico", "ozumi", "atazapexe",
    "ucigulu", "oqeqe", "uxuxopuq", "ibure", "sewihozav", "oloberu", "isagad", "ocaqihixa", "caguxajop", "lovimuj",
    "wefiva", "hamasahu", "omidaqe", "obodafi", "yexegom", "humerape", "vaxikej", "gegokezox", "rawalik", "fabipaz",
    "uzofiya", "ekisima", "gopezez", "boduy", "fecevi", "fisuy", "asilo", "ohajuda", "nayax", "ihotiw",
    "ipaco", "janat", "upogok", "kupava", "juyigi", "perisat", "efeqaquj", "lipejoved", "batosax", "yisum",
    "ifava", "dojizewo", "kekomi", "upugaz", "mutecono", "jayufu", "lilivub", "urikoleda", "fogusanax", "veyefas",
    "bebop", "uliqileq", "udidahigu", "azicot", "zayew", "tocodid", "omixoroh", "roxuha", "masubali", "zequr",
    "seheti", "ugimolut", "oqetiz", "ohivafoha", "huromaxis", "suwuga", "gegoqup", "ruledujaz", "duxikas", "aconoheh",
    "agohaf", "nedada", "kerozapez", "qodumefi", "poqon", "porar", "odenapef", "iqoyi", "isiwodir", "uhaxajom",
    "gixofaqo", "iweqekig", "adoma", "feduxu", "hixuy", "elunirij", "cowas", "cuxiyow", "eronanoga", "urekaxi",
    "ipukovata", "apifunare", "fahipedo", "ulepuju", "poluxir", "mopage", "ewuteq", "exosudib", "ijeceq", "giwupena",
    "fafayune", "zoqovuqi", "cizuzusaj", "xeyuhajo", "uyabul", "caruc", "uqiruzow", "osohah", "ticezede", "cobemiruz",
    "alefen", "zerizum", "inanomupi", "iwifeq", "idugije", "isiqoca", "exuta", "zevucayi", "avebanore", "jawal",
    "mifovivig", "gulap", "dimok", "epebicidi", "yeliwedo", "ununah", "naginatop", "hagol", "luzawiz", "jituhaqo",
    "zapuh", "meyisesiv", "adazix", "nafeguyok", "fuzoj", "usuzi", "iporatino", "bivep", "ropewowa", "zucuf",
    "gowocaga", "exomos", "isimokod", "agaveteca", "wurohezih", "jerukifo", "utawaxefi", "hipuluv", "rucutubew", "lapopuvet",
    "calodo", "ucasija", "diviqoco", "mufonago", "gocowum", "xiruxi", "egeyipib", "yomew", "unike", "eqehudagu",
    "egiqodiqu", "rizapeze", "olujijun", "yusog", "enasuwi", "uvapo", "ujeke", "obebokede", "enopox", "zakeqof",
    "iyixuw", "baxojemom", "bewaqu", "lixagokat", "edovujih", "codukab", "etehu", "owino", "wisaget", "fijip",
    "tuwadoqo", "erikacuso", "luceris", "oqoveqo", "igenuzi", "eselaw", "tepib", "gozakome", "apize", "bemuqefu",
    "omavat", "quten", "nufapu", "widat", "isoleve", "gifel", "osasi", "ganucewex", "podexomay", "itunusew",
    "bepiqu", "aradeke", "maherid", "yamisifa", "votatebi", "ekopivoc", "pohoyova", "aruvonasi", "yugonu", "ikokud",
    "walor", "ocader", "dapimif", "dutukuki", "ofizotul", "yumohogu",
];

/// Dutch word list.
pub static DUTCH: WordList = WordList {
    words: &DUTCH_WORDS,
    english_name: "dutch",
    prefix_length: 4,
};

static RUSSIAN_WORDS: [&str; 1626] = [
    "tirarog", "axaxoguna", "ciloq", "nefijepok", "ozobiye", "faleminon", "isavewo", "onijakode", "arosirud", "analatu",
    "cihozi", "ayoxasixo", "meweruxol", "epuqa", "gurunuyir", "otefe", "egufurumo", "nuyomiv", "icefu", "ehuxot",
    "nuwujoq", "abirogoj", "sefow", "ologal", "unoyubi", "qowexi", "iguyic", "afatuyeci", "ekuyow", "ihixudev",
    "emajove", "rosikaki", "ileki", "sacodikif", "xegixu", "viwejak", "oruhucive", "irejaqi", "bamowiyor", "abirizi",
    "sapilojey", "eraverapa", "otonaf", "zibope", "eyohase", "adiwewe", "igajacop", "iviwiqi", "ajoxelov", "mokekawac",
    "irunog", "ikibi", "uxeyod", "okawab", "eronugeki", "unexogeva", "quqak", "obutete", "okasi", "cewidulig",
    "eritufiko", "xipun", "ocaqor", "weyekuga", "lasib", "hodowiraw", "zuqewizu", "ayetow", "uvevekob", "ularafiba",
    "oveloniju", "judape", "usidac", "uxanasehi", "verubeco", "wujahupa", "wevupirit", "ujajorul", "mosuxi", "yefeq",
    "mebimo", "ucaney", "ipotuso", "eniqoseke", "facaretec", "zuxukuf", "ajuda", "nubadumo", "gumabur", "alukosori",
    "nunujoxi", "reqaru", "awoxeyu", "jakatihex", "aredejiw", "uqoxo", "ahemizegi", "henako", "ezapupi", "fupolukos",
    "asilifedu", "jimufohi", "noceyova", "matibewuy", "satofaw", "adidudox", "tanoken", "enikix", "kazejali", "julen",
    "ozexe", "megacile", "gosaxow", "tayazacum", "qufalo", "qixuqor", "todeyo", "icuweva", "vudibum", "osihubu",
    "ogucideze", "gisozobo", "atekas", "buyahef", "suforuy", "iyoxome", "adixo", "ijipovi", "pamicuho", "orevoh",
    "ralena", "juwun", "fuyemukoz", "uvepeq", "uninub", "efocu", "upome", "lewopuru", "eniyaso", "asojil",
    "uzejozuv", "ebace", "enokeleko", "buvepixe", "adikaxis", "nuyoqu", "ewemuw", "ugogo", "peboqedo", "ebosocuko",
    "tuwoc", "xiyekepa", "wejupevem", "bupin", "anunixet", "hihamava", "odedinaw", "duget", "jojesa", "vugigera",
    "avasoji", "upesagoci", "iruhoxenu", "mocos", "anabazolo", "copakib", "ocewazani", "izalocoy", "mepewu", "vifipaw",
    "nipagunuy", "ukiziru", "tokunoco", "ihoje", "runuwet", "esicadeca", "pozoj", "nakoriy", "oqebipemo", "tapebafe",
    "azuco", "dopojeh", "usevuxom", "yupoluco", "donuyukun", "eyuze", "suwez", "emijoju", "pefot", "ayitari",
    "axapoxawo", "sarapize", "ayezuh", "koxuhere", "zoyihoda", "eduregimu", "buwinaf", "akibo", "ukoto", "qupep",
    "sohocid", "ufomigoni", "biquwaqi", "cibace", "haren", "ovavetizu", "ihiyefox", "hevetu", "yixeza", "basedel",
    "akiwa", "hawojonu", "zuqusenar", "kawawin", "sufam", "odayasu", "iyolumifa", "xuxoda", "adamuwo", "cakokarep",
    "upijixes", "afezonuc", "ajefim", "fibeyo", "utafibi", "axomaco", "ripan", "tosevo", "itojev", "nucin",
    "zabir", "lobigo", "ihewegosi", "oduboja", "nafesenok", "ovoqe", "bicolor", "oviqul", "vojigahor", "ohizavoxo",
    "daqan", "ovume", "opakibe", "ukegabuto", "rebat", "zunafos", "wodudut", "iyewagixi", "wefexosey", "efuweval",
    "bacuy", "raqelobeq", "oxamuju", "jukureci", "fipiyo", "enusehe", "quyag", "ewanal", "niwezepu", "asanuv",
    "rabarojeq", "koxer", "foyupon", "firace", "ogeluqi", "fuzot", "uqiqirute", "vesuhoj", "jotamipu", "isigiyo",
    "afenejera", "amucu", "docajikog", "pigizepaz", "omososeci", "qeteneyag", "popatoso", "utuwav", "uderur", "ohuyumow",
    "obenob", "gifay", "rakaqer", "enaludiho", "igafaz", "sejix", "igaxojix", "ureku", "pekubogek", "uvonu",
    "suyakeko", "ocajegiw", "vavodu", "raguzahu", "eciruz", "ixadelex", "musiya", "necimuwi", "camesawek", "jelaqoje",
    "suginiqen", "dozilepu", "vefapad", "uquwubule", "ixisabi", "oraxu", "etuliqadu", "bukiguma", "jucuy", "ajahi",
    "lileqihut", "alose", "kuqoheh", "ategugu", "iyopuyuy", "rakuwu", "usiwu", "lasuqa", "utumujep", "qoluhot",
    "radulih", "pitere", "teqesig", "wejusefal", "atunehadu", "idutev", "zikuw", "redure", "ikimoyogu", "erazobiz",
    "upenerac", "ebokojo", "votuwow", "ugejopez", "doxamakel", "agorahi", "jipec", "ijixicix", "zagipotef", "oputelina",
    "gesosabel", "ehexuwa", "siqokihan", "gukunif", "ajakubu", "powegir", "oqahoke", "timag", "ecako", "eyigenaho",
    "yobobof", "nolapitek", "iyipi", "iyitiho", "usovu", "ijaxi", "ulejid", "exufogo", "ibiwaqoga", "oqifu",
    "sivibupol", "qicalekud", "ekeku", "ganolun", "iyumapu", "ihobehure", "ibitik", "faxeyu", "efire", "medagajoc",
    "bogozes", "upoqibow", "livimu", "todaji", "iweleye", "qohahiw", "ahanatagi", "ezavehu", "ukefamem", "koloboqob",
    "umibovuje", "otupaq", "ziluyuna", "uwabatu", "afohusey", "rigiki", "osuhoda", "riheked", "ifuvur", "oxorurohi",
    "sasuquz", "ovohetoxu", "kalakamek", "itinehuc", "ezovapiki", "hovaquj", "mapowec", "ujexexat", "yedijeley", "ifepi",
    "acudugo", "pimowab", "ozegazol", "iwohasuj", "ugupaqita", "tokisayo", "ogatitire", "emicufop", "boloqof", "kofeyegij",
    "imumi", "dijic", "apohex", "abiwi", "iqibivi", "kogam", "voxan", "ceyize", "oqanoxa", "xeqebekac",
    "duqajux", "usori", "zequficeh", "onigeho", "itifah", "gajih", "ubidubu", "uhofono", "eqero", "ehubemuqo",
    "ibubom", "igiza", "galimatec", "uniwoxey", "ikuloyega", "ubogepiso", "defomizep", "juxudaj", "mebiyedo", "femiyux",
    "egoyumeko", "odudi", "ujecaho", "iyarok", "agalide", "hicuc", "omilolex", "matosejen", "dafajabo", "sataku",
    "bituzoyum", "uquso", "dudobij", "lewoy", "unerage", "ohugu", "ruqexe", "ukuxenil", "ucijinicu", "ipunoroq",
    "oyaxigo", "uhasijox", "tokij", "mavasu", "axacecu", "izevo", "opacuxa", "micopuza", "cimabo", "ziyed",
    "qalafoqi", "uzeqebuxe", "amusesebo", "fokojuju", "hunab", "ebuciliw", "aruhevuv", "kadeharu", "sinusabis", "jirac",
    "icileziba", "ofapuhe", "iratanas", "fuheluge", "upaladoza", "yiyadipej", "jabijufe", "icexop", "mubugiba", "iliri",
    "gihos", "gomife", "sopuye", "tebemovuk", "uyeyu", "qifatol", "puwalu", "femuf", "ciwig", "uviqe",
    "ahudi", "tocevalib", "zefiyut", "kuxiq", "pobusup", "ugajemit", "okiqo", "oxiboney", "pudojeqo", "udexexejo",
    "opukiji", "okitole", "ijunu", "cayefif", "padewec", "ewiko", "ojijayuv", "unaqupaf", "udole", "jesenepof",
    "iyokayu", "uholekidi", "epimu", "vopalozej", "oruqimad", "emivaba", "ozisedaw", "ijunadire", "izofawami", "yedanur",
    "gahomogob", "cirocono", "evovuda", "kuyudi", "ezehihu", "enasebobu", "efadole", "neqilake", "ehoruyov", "edixa",
    "azewariw", "patofo", "iliqugofu", "bobawali", "bifutu", "ofilidog", "oqejo", "kucox", "utokedi", "amazobo",
    "nakumijej", "jifadabe", "abohuwu", "abayex", "ihepa", "iruvapuz", "evidu", "ohelos", "kasojapal", "ufufideza",
    "caqido", "noqen", "esibigif", "esagotile", "ihecepehe", "bivecoxe", "asukatini", "xaluviji", "ulatibigi", "wadisixuh",
    "muzoje", "oqolivuk", "edesup", "ofoci", "cenat", "terod", "obusafag", "dixawes", "qekig", "oweducifu",
    "ujoqoren", "lonaye", "emeka", "susotij", "hibume", "ujiqefu", "cepezimew", "itixinu", "ebudi", "ibazenuc",
    "adasisaq", "napohegec", "imevegajo", "esabivu", "maxaga", "hogelezih", "udupobine", "fupoparuw", "cocefixi", "lobep",
    "mumawud", "kumovuce", "miquraco", "edunogeh", "kepasov", "yuceyokah", "pojik", "esofasula", "requfim", "uwinum",
    "ocuhite", "vayahorom", "tunuwog", "mawohu", "ajiyutir", "efebe", "akoter", "zucix", "weyaqeb", "evotuta",
    "vunugewij", "ehujutus", "rovucagus", "efetuha", "gizutiq", "uzizuyoku", "epasomoq", "duluv", "fomiw", "yomerugoj",
    "qexaqo", "iquyekege", "lowan", "hitovatoj", "ajijewuy", "oxerane", "zamoyit", "exicida", "rasojeb", "mozudebu",
    "iludixogi", "xapuz", "odivey", "feceheho", "tufil", "oxodi", "naqubo", "iqefamat", "lonafop", "rebim",
    "foyeli", "okeloruci", "xipemuqo", "zakixa", "qulupap", "aqasobiso", "uceqic", "ijoreca", "xicenu", "sayul",
    "ahodot", "egabene", "muzutujed", "bozatuja", "ateyile", "aquyagonu", "owiyoze", "ulisu", "gubir", "pesoq",
    "umazax", "ufonuwagi", "guqaguhof", "tisaxexeb", "mexijoji", "mutaquci", "asore", "elezozoca", "ocebap", "rufal",
    "ahuda", "ezasebe", "wewilal", "omoqi", "tahivuwi", "oqiqeseb", "picifil", "alasex", "etuqavox", "luzicepuj",
    "alafaqa", "qisupela", "foyarure", "osobaziqu", "itusari", "payuyi", "itodofoq", "ehuhugane", "ebiveyise", "udizec",
    "hupuxiy", "zegoxub", "esogoq", "abufuju", "toyupoz", "fanejof", "axiyol", "ginul", "oduvef", "okukaban",
    "codum", "pecivew", "irugi", "toneha", "fumeyuve", "bonuzixe", "upajekosu", "tagac", "mocubopup", "eseqeyico",
    "asolomo", "ixaraf", "efofugenu", "ekijazih", "xehusa", "omiwic", "reporapih", "aliwe", "tihugey", "atuvofet",
    "hiditig", "utibijo", "ipazop", "ceyeqadob", "abayoxol", "bibip", "usakid", "helene", "avuwafa", "joqova",
    "buxuqe", "eteda", "pesek", "atune", "ebododo", "wuwog", "ruxujoxu", "zehikok", "toniwa", "inisowo",
    "rokisit", "eweyuc", "agetok", "ojalaloje", "ipoduqex", "zawopuqim", "pidowuqoq", "wesareha", "efahelad", "osifu",
    "awijeva", "dofeju", "sapuqiba", "apimipez", "ibilis", "axuyol", "vukez", "onagixuce", "dohazen", "eqevib",
    "elolo", "kalidak", "hiqub", "xekaqufi", "nixoked", "fobere", "ohute", "ifotumuca", "emiruzan", "ofamiwar",
    "oguci", "qahig", "fepos", "ehumijis", "padivi", "ufelun", "jaqer", "gayinile", "wakiweb", "userunohi",
    "cibaqabik", "ipiribo", "ohikor", "nokixexu", "felet", "tonus", "emepano", "qepute", "toyiha", "ezikimi",
    "udifawi", "alati", "kuyiqexa", "urarim", "lufeyipi", "ozavowid", "ucuzi", "hasuseme", "recatez", "nageyafo",
    "oxokizaxo", "rifateb", "uhigapus", "uloza", "oxifaxizo", "esucel", "voculiva", "qagef", "poripow", "eguhe",
    "xekupos", "seqaca", "ukumitim", "feqilixec", "eraka", "avocuwap", "egefebena", "afeyuq", "piciquteb", "teqolica",
    "honutig", "azovula", "durezeje", "vivica", "xizudenil", "edubog", "itufumo", "itaco", "goqaquru", "quzoqo",
    "ohedufu", "iguxe", "ahosazeku", "udivo", "dokex", "erunuxixe", "jocil", "coped", "bonenawe", "sevuwum",
    "eyifuqe", "recokahot", "lecozu", "uraboy", "zanuhato", "sukahoy", "iwador", "asawayuka", "bezeni", "gosicano",
    "nebafi", "ovohof", "nadedob", "emuduzos", "vipofiqu", "olegeloqu", "ohibu", "egoya", "ruholux", "hejehude",
    "oluxu", "uxuluveni", "todaxesa", "loxulosib", "lucizijoy", "yofelaqa", "rusubig", "eqineli", "kupulaz", "lukomoboh",
    "gazenic", "hojavec", "juduwiv", "yifocen", "yegexef", "ijeceyug", "zopolus", "umiye", "zahayaju", "akaqo",
    "asiturub", "ihacuw", "ixakucod", "sidig", "giyoz", "gecega", "kuyehoduv", "ceyowutih", "ivuman", "idurafuz",
    "aqazotaha", "uhoyo", "buvixah", "esiji", "iwalojex", "ixoqe", "vifowajiq", "eyapis", "owahihet", "erevucen",
    "nukebe", "zeton", "ranusiko", "wuxalave", "lozecu", "ihomawaxo", "nerebijuk", "uwufegalo", "rovoja", "sipipici",
    "eluquhow", "cafawuxo", "lopov", "zuloh", "walon", "afotahozu", "upara", "juwisafep", "alugasito", "hocopos",
    "qohisor", "guwop", "giwigeca", "osikaziqo", "rufasiy", "axosajiz", "ejorib", "dixatep", "ojesovev", "uqunela",
    "irinato", "xiguz", "atefuhet", "qezamuvi", "zunimop", "tuwivajah", "axisuwu", "awapenaxe", "musihodu", "ikokoyaxi",
    "ridewore", "ehuyo", "fafavogox", "ijanafemu", "laxarukid", "ipiruzi", "uhimevu", "elira", "rizoxaxo", "wimut",
    "juvaw", "iyide", "ehorenomo", "otuzeho", "idirojug", "gaxayi", "uxokizeka", "masahe", "ihulasida", "wepig",
    "azirecoqo", "itufogujo", "mumek", "dutoto", "eqoxe", "sogesa", "qeridon", "cuzevebev", "xozux", "moyoq",
    "qatuka", "araruya", "eyeze", "cixit", "avoborebo", "uhodud", "ihodudi", "tirujer", "ecajun", "gedimohu",
    "olarezis", "ofuqiti", "mihuci", "zivuv", "efenapo", "ibakedid", "eviwuxef", "haqikawal", "esaxejixu", "eseki",
    "uqiwogo", "utiwebase", "toven", "afepu", "aqoxab", "kaqikutol", "daxiyeca", "uqinuti", "reweg", "uxomob",
    "apubiw", "utodi", "zucaquduv", "ziyuz", "munayaha", "erizow", "beyibuku", "yamopazoz", "idutefenu", "qetopa",
    "nizake", "ogokudecu", "ojerogol", "xuliwizup", "abose", "wiborutuh", "efopox", "relaqe", "icodo", "eravope",
    "zebigowey", "olawate", "palewek", "ehexe", "nuqubad", "xujibuxi", "vurux", "egojobu", "acilopoc", "pomase",
    "xupujasok", "abosisulu", "najud", "cufodakod", "osakidor", "exuta", "qowapoxi", "nadagiha", "mivolelu", "atami",
    "adebi", "unayoj", "qubeyana", "vefajak", "hesoyuma", "oxohe", "hifejiw", "gajoligi", "zifelamu", "etejox",
    "oruzos", "oxesobuc", "azaro", "etifax", "umarasohe", "ixuseja", "ubedaq", "aloheji", "ikacojuj", "yagopi",
    "utefudu", "hetojuvij", "qanuro", "xigicuqih", "gapeqiput", "siqas", "epuni", "isoyis", "pobug", "bacocitu",
    "ahazoyeb", "uqucu", "jinulidip", "udutu", "tubocukoc", "jakuqohi", "elewe", "kumewedu", "xinih", "kosiyok",
    "vidaqil", "duyim", "oxinadem", "uwiduwax", "oxafa", "talafuy", "deyuqe", "lotoz", "suvejiy", "puquyozif",
    "edonise", "yapuruya", "uguwemic", "ukijuzo", "puvinoz", "luvukoyu", "amafe", "tedir", "gahem", "ekiyerage",
    "eviqutoy", "aneqideje", "nugur", "ekeqa", "uciduxic", "cifaja", "ocofatiyi", "hiliguwa", "zubovob", "unupo",
    "atejosej", "apudup", "ironuxigo", "ozonar", "yudezu", "ufawo", "soketerob", "esoxudujo", "aferane", "iqedop",
    "ukevov", "vixogix", "behilifa", "izopoduj", "yenat", "upuqecem", "evaso", "isobukuse", "ohoxi", "fawuwur",
    "ixefoxaq", "letiniv", "iteju", "iqesi", "iyaqabu", "ekazagod", "umaqerido", "yizisod", "oyutukiy", "ijeko",
    "givuyupux", "dodekofi", "vodupetot", "ilifa", "ogifequx", "dimaxokol", "kinebuye", "xecafo", "udibome", "girupepoh",
    "uwevipu", "modezid", "agacoxij", "fucot", "hapebo", "wifipu", "umudaheli", "raqukotuk", "mocuvefud", "qarabacuj",
    "efohuzuc", "woxame", "iqayip", "jeqip", "iworume", "ukeqa", "imenunaz", "ucudixu", "heyun", "voweyuja",
    "fibagobec", "nanisopac", "iqomifava", "zalizorud", "momezim", "betob", "vinigul", "kigoyoni", "anuwo", "opataguva",
    "itice", "cixasevo", "mahoyemu", "aduwizugu", "epehi", "uqanova", "upaqo", "iqatag", "ewaxi", "uneka",
    "govemiyev", "asirev", "sequref", "ojucu", "babafege", "wutohuxac", "bukija", "jodabe", "ibubibiw", "adenise",
    "vegutir", "jujov", "rupiqetuw", "hilupafig", "liroro", "qiqih", "apura", "vavati", "udala", "ikipa",
    "ibihetic", "ihucukere", "atoji", "qewuko", "muyexi", "elide", "fuhajole", "moted", "wuyuq", "tahobami",
    "ugohafume", "uzesecuya", "yomegig", "honozev", "awata", "enomaxu", "ivakeliz", "itutibev", "ulimak", "obuxiriwi",
    "igeka", "ageviq", "anogasi", "ehono", "uyumah", "apejaxud", "picijifu", "bupoluw", "tibugu", "usiwat",
    "omaci", "ubisiyahu", "exufuga", "axufu", "iqisujeje", "aceqaca", "nahewatak", "nudaca", "bozuvor", "someheg",
    "jutojot", "pokulatoy", "giwuh", "anamasa", "gicaweje", "terika", "yefoxe", "sevaqidub", "ixisud", "ayinocuk",
    "ovakuyux", "abubanufo", "oyubuta", "ucidowuvu", "nemepariz", "utizit", "vulejaz", "bozima", "ozixigoz", "ohuwesap",
    "pumeqih", "napozeroh", "igamozofo", "inoru", "fetuc", "qimobi", "calujule", "ibediqev", "guxazo", "jihozaq",
    "etudawiyi", "ewokuqoy", "gucohu", "kanemukuh", "ebavipoc", "locuno", "dabolojih", "ojivumuju", "eqavuzu", "owisiriga",
    "ujesuh", "lereboto", "eticen", "onomagume", "asugice", "eyuhi", "arekiqo", "axonuguwa", "pacoko", "reraju",
    "ucuhituj", "racowowa", "cegudozen", "bipawas", "pibayine", "esoyoni", "ijeyinepa", "kokamiyux", "jorebamo", "xacayol",
    "vohipibe", "koxuheyi", "uhagu", "ivihoz", "veluc", "muvuhuvu", "ovexata", "uvedosoh", "corev", "pojivon",
    "zabizono", "japuguh", "aneruw", "acuvece", "omicuj", "ojozoq", "kesoqidi", "ohiqoxis", "necebebow", "uqarewob",
    "efuni", "avowugaj", "ibapiba", "jibegu", "acemili", "eqikakux", "xeduq", "bufarokuw", "uyawuj", "fulecad",
    "ifayifoga", "dobuvetow", "ejipejo", "upomosuf", "koqiye", "ebome", "pifir", "cisafa", "uhaco", "suqimiwuz",
    "poyidu", "ojohuyace", "pipax", "ekato", "mezapenud", "iweqadu", "uyuxuf", "imuyu", "yahoh", "olomi",
    "oxozo", "sebefekom", "zebuli", "ahude", "afikeyu", "etaca", "oyado", "arelocad", "asulet", "filovus",
    "omogunega", "bukanexu", "adacuvatu", "lasoj", "kanevo", "eqoqa", "okizacur", "ebuzopigi", "cazipo", "luzoko",
    "uvavesu", "ovugato", "opuko", "olovikova", "agahoqimu", "useye", "liyud", "isinapo", "binaseju", "sutuve",
    "araraqo", "sajoleca", "efotehil", "orabuqezo", "aqaciwaj", "oweqiki", "mosihi", "cadareneg", "ihakuwiq", "lobuh",
    "mozalof", "epiwobira", "odizijag", "okacozala", "ubasiwa", "nenumezuk", "omesowo", "nijoziguw", "rosah", "uvaqija",
    "xahabelo", "obutufaba", "anulo", "abalojen", "opeto", "ifiyiv", "agacesor", "wevob", "areqo", "etegi",
    "gepus", "diyovij", "eqisig", "egahut", "kecocelew", "vaqibu", "unebevi", "fohitumel", "obiri", "ejapisiro",
    "fimiwidu", "xiniyi", "bobami", "anetegex", "asilarute", "uxoyibo", "rorutopom", "alutuj", "udososuwe", "poruzubi",
    "kemuq", "fanubup", "ezezisox", "igekud", "hufiv", "apemog", "vobavu", "uwivuqo", "lujarog", "ohizixe",
    "apifaq", "ugoweyovu", "oziwudo", "wegohi", "uzehowiv", "monayuvox", "imoba", "buginac", "ofarucoma", "biwajiq",
    "torukuzi", "ewuno", "xaxopumut", "evirodam", "meraje", "oceneduh", "obureqeto", "icovo", "uzezote", "bozadi",
    "oviwi", "bikaqey", "idobud", "ozanig", "epilelod", "ozome", "yunuz", "noqizicu", "eyocugov", "ecefebu",
    "buwuxeyus", "inizi", "ebihudu", "hirec", "fisofij", "ariligu", "exojem", "guguv", "nijay", "waduf",
    "itanubi", "pemeveb", "fuloh", "movikame", "ihikeyu", "equca", "badiko", "azuzupe", "ilarije", "puluripej",
    "zegumiv", "gupipiq", "qequzib", "ereyupocu", "pinenomir", "iyuzomu", "vunusuz", "jekopot", "jocaxiruw", "oyikikiw",
    "taxepor", "izeti", "aritis", "uromo", "qujas", "oceteq", "bidefu", "kipoda", "atudonul", "rucolap",
    "rilodofi", "kejutabiv", "widaxifob", "odoqa", "macepe", "awuxoja", "lobave", "agivayum", "etusuxe", "bunak",
    "joviqotiy", "ugilotoy", "eruxenic", "uwibo", "legopajar", "imovowu", "ozobopa", "opukivemo", "zosekuwu", "varoxen",
    "asapiyam", "lepuhisak", "ibasuj", "ofelud", "asesax", "ebikijol", "kaduw", "nuliwemuf", "rakayo", "saruhawi",
    "ecatubeyu", "jexitoni", "ixijusu", "akucuyara", "ujoya", "puzupiwid", "kesimeg", "cejozu", "gimotobe", "gomehod",
    "bilaha", "zozawo", "iwikohed", "ruyih", "hasub", "tabewuci", "jusik", "ebare", "ajaquze", "oqarite",
    "ecuzuwibe", "ujava", "ukogesu", "coluz", "yonivohug", "ixijufuve", "egewax", "demuy", "ipulizet", "oqeko",
    "uyara", "hawuj", "omilito", "cahutot", "ehozot", "nuxuberot", "kunutitin", "gitilajag", "famoxo", "egixop",
    "zovof", "uyonenav", "kefahux", "regevu", "uroxun", "ikalicar", "azaqu", "puzizos", "jakuqo", "umeqixu",
    "uwisuzija", "acizower", "iceqoyu", "guwivuqa", "ebebixuhi", "lisul", "ufecokal", "vuruh", "tarejaqi", "iwoququv",
    "uguwuxa", "piyoluseb", "ciwelo", "irowo", "avuboqi", "onajeda",
];

/// Russian word list.
pub static RUSSIAN: WordList = WordList {
    words: &RUSSIAN_WORDS,
    english_name: "russian",
    prefix_length: 4,
};

static ESPERANTO_WORDS: [&str; 1626] = [
    "xatoz", "ilixeliw", "utawuc", "yuronaca", "hezade", "toqubateg", "isilimoqi", "urudaco", "gaziruyut", "amupuje",
    "odilihiv", "fiyuyujom", "uzini", "ozodibaw", "owine", "wayasoxus", "ufujaqoh", "podemozeb", "wawor", "ahexu",
    "xolidobir", "itejo", "zelut", "moyaki", "leseca", "arabepawo", "upuxeso", "iperezowo", "sakihowe", "abadun",
    "piroruhe", "agamej", "eyigu", "musoces", "okakilel", "opohevafu", "ewefevi", "ahajesibe", "boveyiz", "suxuhu",
    "wawuwode", "igeyaz", "sumoxaxa", "nomuteme", "ahidew", "qefasuxa", "cowude", "oqiyusa", "bisagoma", "etocemiw",
    "foceh", "ewujo", "ojineqo", "vofimi", "telayehav", "iyupat", "osipiraju", "ekedabava", "ejisin", "pizoti",
    "qaqezin", "goxowumic", "giwej", "emajik", "awemexoyu", "zobehutu", "emube", "pezodi", "icabic", "ebegoyuxo",
    "avolo", "hupuhal", "cixaf", "ahetelix", "dozif", "zapep", "bilag", "dahiyutav", "tokimob", "emowasak",
    "ukapex", "abekadim", "fidase", "binuwimi", "ubiteres", "duzevit", "detuwiqom", "xomib", "axicar", "vivupey",
    "akarof", "uliwu", "ijiqabifi", "honezecub", "deboviz", "esozikav", "jeyixa", "ogepi", "tomuwavu", "oyobupaki",
    "eloka", "johada", "ikabeje", "qudizey", "epirojafa", "ubuci", "nasoviwa", "imujij", "apalu", "yawiqe",
    "tahig", "xuhapa", "wucidaha", "raroko", "oxucuxur", "izarogo", "sedubamu", "jeqite", "wunaq", "itigovu",
    "muhikeju", "megazah", "ukuya", "uretohane", "liduwawot", "wuben", "vobesuwip", "ahirafen", "takureq", "ihaxij",
    "agutil", "pebogopaf", "pobafebe", "alihazihu", "beceba", "qajoze", "tikuqeme", "kecevase", "iparuhe", "oriceyiv",
    "tuteyoril", "qafoyi", "yolugobe", "tafudujo", "norokizu", "nakagod", "afokohi", "ilokemuxi", "caxobipa", "equqitaro",
    "ukiyota", "uwojif", "gohovelaj", "oyewuve", "sevoqeh", "vobos", "iqasojuk", "igenowi", "egujali", "wasesi",
    "igudipo", "lebixovez", "enesepime", "azafipi", "ogibi", "zewefenu", "quropal", "nuselojat", "aliquqog", "agepof",
    "rikul", "oxefagik", "aherezu", "bugami", "ijediyek", "gopat", "xoqirecif", "zewizuv", "zayibijo", "amuhoxa",
    "nuvapiwul", "dasamap", "uciwe", "suxejev", "ubona", "hulebuci", "obiwocege", "cigodoxes", "okibupu", "ubuwuyu",
    "zepuyixiy", "ofuhuta", "ozuni", "alusih", "idalagiy", "abepah", "ehumusoq", "hotek", "bahepiy", "hasajupu",
    "ufabiyak", "cufekaju", "erasaw", "adohef", "utumayaba", "itudujit", "igocuja", "yeraqizad", "avanumux", "uvaqawa",
    "imoge", "mokeyako", "horumav", "vobogolu", "kazamalo", "miviw", "numivi", "yewumohe", "qowuramo", "sahopoy",
    "oduxaz", "yanayarix", "ezoqonu", "pabepu", "toxulocar", "hiyaw", "anaqiqoxi", "qosifiqa", "viqoye", "diberefe",
    "yerigalo", "cexaz", "ajuzanad", "xowis", "qokaqir", "iqiwe", "idude", "aberew", "imafive", "qotap",
    "ibufuboda", "juqeyoc", "anulawana", "xamid", "jehah", "xobiwo", "oyakalo", "obuyiteri", "opakuhuta", "taquxid",
    "geziga", "oqide", "docusevuq", "arumok", "xokiti", "oqohanil", "ahegeru", "dosicarud", "wikax", "xayawexek",
    "azura", "zonaw", "uxasoh", "esusoke", "ehohi", "xoqawari", "azafaq", "reriv", "esofihud", "gitezile",
    "uhoqi", "zifotiwu", "yupako", "bifurepe", "vewezav", "ekunovad", "qojeye", "ovupusa", "ranepe", "aziquhemo",
    "toyunexis", "dimelaq", "afasorod", "iqamu", "jivaloke", "cihiyedil", "zogocez", "idizalida", "evejuvid", "uvakucav",
    "savoh", "nunefaza", "ekeci", "aresuti", "ukero", "omifi", "qumaz", "zajel", "celoj", "ocumid",
    "cilumeqez", "hirifuvi", "ticiqo", "palisafur", "akiwu", "quxoxo", "vepux", "vaguyuke", "bageniduc", "lalomif",
    "idasoneb", "upudaqequ", "ajowacamo", "uvabeku", "ayidenisi", "ulimuze", "etomu", "marusun", "noyaporo", "ugiwawuy",
    "iwidike", "bawupiki", "xomot", "honulapob", "afesunuje", "azucebi", "hemuzepep", "yoyigivar", "amereb", "ovuna",
    "uxewa", "lijexil", "tabido", "lujapev", "omeyu", "unemu", "lacokuzat", "wisitub", "etezaki", "uhapewuc",
    "xoyif", "emalun", "igini", "pivuxe", "ohifexu", "nabomotu", "udodo", "necahic", "oriko", "ahaba",
    "ozetofo", "uvukih", "gakor", "eradese", "osewoloku", "ajobad", "adapuhoy", "udeluwiva", "rojuy", "aguzetu",
    "abiwuvev", "xowahiyax", "ujegefad", "joreritim", "aruna", "ikere", "mitoni", "ficivuzey", "fimayebo", "bipocinov",
    "fotize", "ceret", "otimex", "havelac", "oharoru", "dupuge", "fucadib", "oninukexi", "isiduwo", "afotibi",
    "ulaqirig", "ipusu", "utereguz", "runipawuk", "elukucan", "xaxugumej", "zakuzaw", "lipajevu", "lalafidej", "ketej",
    "ecaqijo", "ofohe", "oroyis", "vapeda", "siyaboxa", "sefiveba", "zojex", "ajenot", "ujafeheme", "witizop",
    "ziraxed", "ekokob", "bupadunof", "mupesul", "bibur", "kesanaqil", "siyefoz", "fawiy", "reyocija", "anuqug",
    "eranacapu", "caxute", "mofijusuj", "ojaji", "sasog", "ukexa", "dixupuba", "ezipugu", "udunax", "ulimojiwo",
    "usirasa", "ozocin", "axuzesazo", "omipanusi", "equqowez", "ekoxofe", "etagah", "ihizug", "vecifen", "icecuvoti",
    "upoxo", "imicisop", "bujanas", "gojomix", "aloraw", "xeroyipu", "onena", "oraxijoqa", "icamexuve", "sebuj",
    "okuho", "zosodamol", "ponejawis", "uyotob", "xexaven", "afagey", "evosar", "pedota", "wohicey", "aziribofi",
    "tixapoge", "hologi", "okupawu", "vifomiqil", "pihavujal", "xokucibe", "unahuqi", "adikuni", "ufipa", "pakaqace",
    "hibucali", "onufi", "lohivuq", "ucasore", "otamihe", "ipupevop", "jakiwuv", "awamet", "hebaguzim", "irawahute",
    "osibanufo", "tahak", "janayilev", "sukonezaz", "jiheg", "rojisevav", "ehebaduve", "ukenikujo", "xepaweh", "itadu",
    "guzeha", "ozojoku", "xacusoco", "acage", "pojogeco", "vusodiq", "jupax", "zuselada", "hemoq", "weqavok",
    "ixatolepi", "pixirihil", "emeko", "hujowo", "wemim", "qoxib", "ucedavali", "eyorozu", "hiyiwebow", "uvexa",
    "ayitoc", "tixuc", "ocugupeva", "paqoqomu", "bebivuta", "vakole", "sawodeli", "gozehexo", "osoqin", "areyih",
    "saretayo", "puxeb", "camem", "iziqito", "qovacu", "jidaza", "omobiq", "biqiri", "utufuk", "onezuk",
    "tedewoloc", "gezexaj", "ocebuv", "vefotut", "afeyilix", "ujumino", "novada", "etuveqak", "idoduqu", "owocoqip",
    "puluburo", "ruzaje", "amukah", "iyono", "doduyuzi", "teruse", "efahijag", "buyem", "ufalaju", "ojeyofew",
    "ahowufa", "segaziha", "lozejedo", "jesuk", "ixivapi", "witoducud", "imomago", "qawunaci", "anavan", "detopeva",
    "icokazik", "ataqiner", "omametaw", "acude", "ajuwa", "wexepeze", "ceteho", "iramovojo", "udaziloje", "bugev",
    "ebudane", "evolil", "udusehi", "ahames", "osuluru", "kezaq", "oqepa", "afepupici", "qugav", "damos",
    "anohaqun", "jorir", "egequh", "ewirito", "ivuketu", "xiguhe", "weyibu", "hutasiwa", "zuyegifam", "zesiqe",
    "uzowayowu", "edicofen", "fitew", "pejok", "dahavo", "ejitiwaq", "ruhuxa", "quyofutik", "oxiqi", "rajizax",
    "usepejoz", "ajonekeka", "buted", "ginojeb", "atakule", "azimodeq", "upuyok", "uxojas", "biyuwoka", "azevufezo",
    "pozapul", "xecujep", "qelevo", "vumalas", "bulanar", "cupuduc", "ufedifuq", "xevomon", "uxulicoje", "kibimoy",
    "azeseg", "alajejesa", "axilil", "uvaxek", "yifakasa", "ohuposaxe", "ajapib", "xebolime", "egugesu", "mitusenub",
    "uderoti", "fusom", "ehulutizo", "ibahako", "rafufoc", "ohakipub", "asuzemum", "ajowirubu", "ejoni", "oxizuzij",
    "bujizu", "usowek", "ofemeko", "vasacuhas", "pidak", "yamako", "koqece", "ugefag", "lenumitu", "ojuri",
    "exuxuz", "ezawel", "oqibe", "omulur", "unaguh", "zuleca", "aqeqeso", "avoser", "bejutak", "eqehupex",
    "sipujoda", "yufaw", "adegor", "qiwoh", "bazow", "amivu", "urokeco", "xopug", "bumer", "mabojo",
    "lodecodi", "mixayus", "kozesaz", "eyekedo", "amojac", "ruxizelic", "bukan", "iyice", "yusacuw", "icixin",
    "orege", "uregoq", "yakepidus", "odamiqu", "uwazi", "pohagima", "pucil", "opiju", "milehu", "cigocap",
    "ukucusa", "xayopum", "ewuxiru", "supeb", "gexoye", "befulavo", "serunub", "fahoqapar", "ejisam", "sanibud",
    "jafevifo", "tivubo", "ajurawo", "ivujinaz", "eyoxi", "gicozif", "eqaso", "gugup", "uquhu", "atatejoyu",
    "iretij", "horati", "upamu", "odejocu", "fuqemam", "faliwuni", "puzulu", "yecafowo", "esusatuw", "izused",
    "osuvosib", "udufez", "eputoxejo", "ihocikeka", "qecojoref", "medujec", "vivilubig", "lizije", "ikasego", "lojalo",
    "izotu", "pejehaz", "enowevomi", "obuvuho", "igoxecuvo", "ijihuter", "idocuzu", "fiyozo", "xovipal", "jovita",
    "ahuceji", "irisusoc", "linowelej", "eferomace", "lobud", "ageciruz", "omizoruw", "doxatewi", "oqivam", "zeden",
    "maziheker", "ohanuyiki", "zulupemu", "gaxog", "wetay", "ihujas", "uhanitapi", "enaluqu", "xilivuyu", "hohusem",
    "cijoyof", "ajimapija", "tokimi", "pequde", "ibaboy", "dejoba", "dazovamuj", "vodubez", "uguwiniy", "xoqerobu",
    "edovulesa", "oquvihih", "tezukaxog", "anufame", "fuviyev", "topela", "qunov", "wucido", "axexin", "vamabadud",
    "ofucuq", "sovas", "pucefuw", "abohoxa", "nizit", "olaqux", "mirawewa", "cucofiv", "zohupawet", "cebur",
    "wesufenaf", "pohugeji", "ekefij", "aqutaqe", "umise", "qucuwilax", "voriw", "viway", "iqeyetodo", "inewosud",
    "oqebizo", "osijudo", "aqowo", "tajavijov", "atukowu", "riqepi", "aqipeyir", "utabori", "aloqulici", "cutanig",
    "uvoti", "ekavive", "obizazuhe", "lorew", "pomup", "ujoju", "nodujida", "minel", "pocati", "ofeqey",
    "fohuqe", "fokokiqa", "orubogoga", "vepidupe", "usoser", "mumeziyik", "izuwi", "luleton", "omolo", "xopalami",
    "biveco", "gicedap", "qiyoku", "cuxaj", "umasisoze", "xuhacim", "ibuduf", "ihuranuk", "hafuv", "xoregi",
    "ayewixaga", "ebopa", "hetubux", "ebemib", "wojunuwar", "jelor", "awoxipupu", "adoxopixu", "ahayeqa", "iqowunim",
    "iroxe", "todoy", "fabihika", "aronuno", "awagoquj", "atinuvug", "suruq", "fovaxac", "mikevo", "oliqapa",
    "edigili", "bujatiye", "fewinep", "akijopo", "pirore", "jayola", "pudibij", "unugeq", "igeru", "usihicuf",
    "gunaqukog", "oxadodile", "izusa", "naviyof", "roboti", "xibovu", "xafak", "garon", "gekinoki", "ayecut",
    "ciraj", "usihoyad", "qujitag", "sofipehi", "ituka", "wiyijo", "kudiretox", "fadeqo", "utifoniw", "mirul",
    "kiyaqik", "ogijod", "jovif", "rokafik", "gixezupu", "ijipo", "egage", "ifoka", "olalu", "imene",
    "vixuhilo", "ezoxiqodo", "everitow", "kihehifu", "ikagi", "uqoxegut", "ericulayi", "oyihelek", "emojuduji", "tufocaku",
    "uniyix", "ixivo", "puqopacu", "valadabu", "wigaj", "ufogiwo", "salafo", "lomavelo", "xemeze", "uvepibur",
    "ajakejapi", "kulivajov", "osanayiwo", "boqefeq", "xufanid", "ovesehi", "enefoj", "ecixon", "gerekodom", "sequweko",
    "ukaso", "turufi", "umijet", "ikimisa", "hipopelap", "ogepuqu", "fenosuv", "odaforu", "ipuhaxeq", "ifuhit",
    "acuwiculo", "molilas", "wigokeda", "oqeqaka", "evitiyu", "evuxivaka", "opejov", "egitak", "uqeviyuz", "giseda",
    "ditulapej", "exuxiyu", "vogitu", "buyiq", "ibesixo", "kixopi", "pifute", "yebet", "isajor", "ibepayo",
    "zigas", "kataw", "iviku", "ajakeranu", "awinozu", "oyifegal", "ehugisah", "abulukoli", "vadowe", "nusukuk",
    "egajohoru", "idiqimiza", "lekizibe", "efihihapi", "awige", "udaciqa", "dosapize", "carih", "yiyaqem", "tobero",
    "ufuqumo", "subugili", "aruruwe", "bovat", "molon", "towacobaf", "jacesumem", "onupem", "ikotexuda", "folewi",
    "qoron", "qeset", "lahan", "icicagagu", "yivolax", "umexafoc", "reyagiwa", "koxubilas", "obisal", "meneh",
    "rojeriy", "emobut", "oxefapug", "hejiwi", "ekeqec", "adeqisoja", "ugihayifu", "turowozu", "wabur", "lalavoru",
    "ekoboyofu", "xeyifug", "mikoleloh", "oduwogar", "xocir", "pewacap", "itahi", "qevub", "aqipibez", "ovigi",
    "mosamu", "vuqodar", "etimos", "apenukibu", "maxezoyi", "sutaye", "beqey", "oxilo", "aroqay", "eqacuke",
    "itamaje", "izixupuye", "qosajibis", "ogixozey", "difem", "copipaho", "afugucovo", "ucepixo", "uboquxav", "wezeguqaz",
    "viripera", "lojaraka", "wevabe", "opojaniq", "utariwul", "lerexo", "irifosol", "edoduye", "mosus", "uqajahuho",
    "kawiyu", "axoxanila", "radur", "mexaro", "arafu", "nimoperad", "ucusa", "mupegu", "pararic", "dicag",
    "ibare", "ofepeyu", "nopari", "esimat", "eyehiqe", "ofidak", "guguxus", "yihiyotu", "dicalay", "jipoz",
    "goguv", "uximayob", "ixisige", "uhoriy", "nuvakebuj", "rexikonej", "okivog", "suvep", "utefumu", "qojoxan",
    "iwiruqoj", "abawa", "xitoviya", "gatejot", "lamoxeve", "uneqavike", "omirihi", "tubequlag", "iravuhon", "opobujo",
    "oxuliv", "diyen", "ruxetevoz", "egoten", "nezize", "oneramoli", "erabav", "juros", "ayugeko", "eyago",
    "ocukec", "okizetu", "paxawamon", "uvase", "pafevi", "dicutubi", "huqukapab", "ivaxiwop", "ewewu", "vineri",
    "oyecafa", "ihenog", "bubuwa", "ekamax", "xifenilu", "fehuj", "utarekone", "xicopaveg", "eqimic", "efihoj",
    "simipeb", "edeyaca", "ogeyema", "upogodeg", "tikojiga", "haqor", "qicohu", "uwedat", "acebuz", "wiqinak",
    "vizodedi", "ubepogil", "jurovavo", "zucavelo", "meduhac", "humacare", "nunux", "xofow", "yepero", "urixeme",
    "irivu", "eyozoj", "eboxovo", "iyebitir", "atidu", "mikunug", "okebacu", "momotu", "ehiyowav", "duyepumo",
    "wuwefoqa", "bawif", "eqexa", "gapuf", "yuzatop", "jeqipe", "icuqecemu", "wuyezok", "emovibof", "kucusa",
    "umoqovefo", "cahonuq", "anilic", "egaveb", "boyewusad", "imolebe", "riyici", "ipexih", "etopeyoje", "zozoteq",
    "ohowuc", "fadigobe", "qaxil", "epuzenoli", "yucuyosod", "gewesowu", "yiqepovuc", "giyir", "lamemegif", "mayiv",
    "hotatu", "opohasoqu", "ehejik", "ofuroni", "aqomovi", "liziqaze", "ogiqowi", "ajideloki", "kikuvami", "ibidubifo",
    "wiwex", "kotep", "uyivemo", "rolisubaf", "vajafu", "uhaxemel", "cunevafip", "vemimoxub", "ayaxunawe", "udagu",
    "yuqisawu", "rezuc", "vipog", "cigera", "nifolul", "esecex", "ateyos", "gawohul", "inuyo", "aliziriho",
    "izufe", "adukozi", "ipekorapo", "duqatemo", "ejeqo", "apuqa", "kujinoyic", "odazi", "epetoco", "regajeca",
    "dosop", "uxadul", "givenih", "ozalugeze", "epacedaci", "vemosaxix", "yahet", "udaru", "azifepuw", "emuzuk",
    "uyefa", "suniz", "ibolediya", "zoqal", "wiluceg", "eqani", "joxipada", "osekez", "ojedelux", "anazapoj",
    "orifeb", "ayice", "anasijic", "bukoci", "jinajagav", "lelerilo", "irawih", "ujijav", "lurexid", "emulo",
    "isoce", "uxuzoni", "ehidug", "naxuvenob", "oqefam", "ewudab", "ukefiwonu", "okexuciga", "itojijuz", "jiyeka",
    "epesurabi", "gokavuf", "yocen", "qiduse", "acixin", "hicopan", "osahavi", "ezuvacofa", "ewohap", "nivozok",
    "xexibus", "ikuyi", "afanec", "gefizuhop", "ezopofi", "cuzol", "gumanulo", "ijica", "izorup", "pajute",
    "uliva", "igifetike", "ogikod", "enuza", "cihudeqo", "wiwapewuk", "vegos", "lafob", "irubajuyu", "qifoxice",
    "vodojake", "kajohifes", "timawi", "obirutilo", "debahi", "edewoq", "jexove", "xigefamag", "nuremanat", "lefuvuf",
    "uyewuy", "pusaje", "lipuj", "eteved", "joyosoxix", "otedoh", "vibaworod", "igiji", "hoxare", "racofugoz",
    "vaxicivi", "ududaw", "fuwohasir", "yacaf", "totepigu", "uvugeruqe", "uyowav", "fagetoxo", "panewuk", "lizidija",
    "mayidivej", "inigutu", "qacaj", "ecihoyaz", "giyevel", "xohesamuf", "iduhu", "fiwogeh", "huzeqiqe", "uwiwaq",
    "guxuraj", "ekugop", "wiqam", "rosilev", "yugecoyo", "onexeyano", "anuhu", "ecitaq", "iragih", "awasuxan",
    "zenariju", "icuxe", "vovax", "bokowoce", "tihip", "taqewala", "qohah", "roriredu", "hibenatu", "jihit",
    "famuge", "qutid", "zopihuvi", "odizaqeq", "ozaqole", "efufumel", "mihavutoq", "zifesodu", "uqujow", "ebocetay",
    "ladeyege", "hepujoga", "arewuyif", "leyunoga", "edexale", "yetikara", "inasugu", "uqunulofi", "oroka", "seyuc",
    "pepelilam", "jiyija", "osaqinu", "ofuqocox", "axone", "hiloju", "ewafopeci", "oginis", "lunezuxug", "oparu",
    "emodiduzu", "amifiriw", "asiqesopi", "pibitifes", "uloki", "narum", "wazuqux", "ejike", "uhavibez", "igara",
    "asotopeha", "aneqelo", "ogacax", "wapuda", "kocavo", "mugupi", "nepehoqi", "mulupo", "qebapupuk", "avitiyoda",
    "wahuhem", "dupuder", "bewoceqe", "yakixuvad", "avehaxij", "akidaroyo", "axozafore", "nuledo", "wixebiyin", "xupecimu",
    "deruhapo", "uqose", "omofikizo", "osozog", "fodowuj", "tobafev", "vavobezum", "xahucoq", "xorikumah", "olecupep",
    "uqepekasi", "medeh", "anecur", "bakivupid", "tiyocego", "oreqe", "zolinu", "eguceyi", "oyoqeja", "limafib",
    "esikiv", "xiqomana", "ayafaz", "tenotavos", "opecosivo", "ewuqedic", "eximuhece", "satiyiti", "tohomowuf", "wevomar",
    "oyamuvaya", "zeruni", "equgeh", "hozeze", "eyezu", "ekaxegom", "pakipil", "onurameye", "cucerapel", "bomeberov",
    "anikif", "waxepewaw", "horonej", "agiwediyo", "nabuqud", "amuqevati", "rixusaxi", "awazekuye", "falosato", "moverat",
    "lokaxede", "ziyaxoq", "ateponuxe", "atimoduha", "evupototo", "imuwikaj", "tijitow", "baweq", "ayufepusi", "kemaretu",
    "exapiyi", "ejuzuh", "wobijo", "ijekodava", "lazuyuqa", "uyimarod", "fujex", "tuvafo", "buxonen", "awalavec",
    "wazekot", "gudogox", "atifesu", "afaget", "ezupucif", "nuyowuhox", "etubonege", "xujiqasu", "neliteh", "otutuxu",
    "qawuwilik", "adufinubu", "uputigi", "hofifefo", "tesesu", "ovetabuq", "unezi", "ezukut", "sosujopuv", "kowik",
    "uvixoluz", "nokiger", "domub", "rulodep", "tajecu", "qehulohil", "todekega", "ahogi", "uxomoniqu", "esipom",
    "anejegi", "guxug", "iboqukila", "awiral", "zisuholo", "faqadila", "laxadali", "avuviruja", "ujisij", "enetecuh",
    "xisun", "agawevux", "fatosem", "zoyaqoh", "fihirak", "avahaso", "lazata", "noyowu", "vovipa", "ewowegeti",
    "xaqumu", "azucogosa", "ecohiquxo", "agivateto", "lovopur", "oqiqizo", "hizemope", "lidezaj", "hikodamin", "exojuzam",
    "ewotufoh", "qilutota", "evowi", "awekekis", "ewuvab", "ramapoyil", "okebakiv", "oqinerize", "pinol", "ubipub",
    "poqawepuk", "oqoyuliz", "onaqovo", "losabo", "enikokono", "digelaqel", "ahevud", "lafixayu", "oriwuto", "uwuge",
    "aqexos", "evoyi", "usecak", "ucajum", "denaqe", "uhelowu", "uyuvacevo", "ogapogip", "cubize", "hubelo",
    "pikazuvat", "oxapiha", "bicokafox", "yakizo", "ziporexun", "nobadosa", "uwibefize", "ecayo", "ejusupuwa", "kifusuxin",
    "polatu", "hujagivif", "negol", "oqutorum", "ebuyila", "gajug", "muwozi", "uqupeceru", "yeyiho", "uzahuqu",
    "mujelaluq", "ogige", "soqapu", "tururi", "efifinime", "eyucuq", "kelokoga", "alisezed", "kurepozo", "qewido",
    "naziq", "ucegefuli", "seqefu", "balozek", "eregazir", "zenowihir", "bupajorof", "zokaz", "simode", "bajitocid",
    "jifuvoriv", "leziminid", "ihizodoha", "copepifig", "mihepox", "bihuzina", "eyopi", "epiko", "ihagusuve", "ufiji",
    "wajokuto", "sereboyoc", "fikesigeq", "zexegal", "mupuxa", "luwukoj", "nayara", "vepaharig", "alalaxug", "yomicojin",
    "amilohume", "eqowe", "sisuyifo", "okutiki", "ejuxi", "uyetay",
];

/// Esperanto word list.
pub static ESPERANTO: WordList = WordList {
    words: &ESPERANTO_WORDS,
    english_name: "esperanto",
    prefix_length: 4,
};

static JAPANESE_WORDS: [&str; 1626] = [
    "qufujatu", "qanuyahez", "ixagid", "fuxonifu", "vebupif", "editehev", "ravixodez", "piqul", "okujoji", "sumikuyol",
    "qekop", "pojasecah", "netobuyof", "uyukiyad", "ixuki", "coyiqa", "ixihayo", "owawijel", "arepoqo", "ogosofa",
    "felip", "hutace", "ecuqa", "xacaki", "mohixepuz", "uwerij", "bokufa", "fajaxepon", "fuzugese", "nujikov",
    "ohubibuvu", "jazedi", "iwahaxuga", "folahus", "qaxat", "uvuzefika", "nigap", "qabufew", "aduvageso", "oxoci",
    "ujineb", "hodeyowe", "vuqono", "yuwedab", "dozuhuh", "ovihijehe", "reroyad", "ixigo", "sehumasak", "pokugeqa",
    "utofifi", "ozowa", "rerumo", "wifop", "aranuke", "dapiw", "axuheges", "ocuzog", "arogumura", "pivecamuz",
    "zaturisa", "orepecoso", "eticenoce", "idobu", "ibeqecafe", "kananonuz", "ofuwabupi", "igibuw", "iqotakib", "saxetaq",
    "podapev", "asonaco", "mezet", "ulupiruja", "soyudatuc", "esoxegape", "uzegiv", "wagif", "qiwupeq", "fupivi",
    "xamocogiy", "gafeza", "liniloyin", "yanadezi", "omipo", "olafoji", "pijadiqob", "setosop", "fojovi", "maqenel",
    "odimoji", "udobosone", "egiqo", "ovuhijifo", "ubocago", "evapucola", "ujejiru", "nacuvan", "anisizig", "avecub",
    "idedi", "inibo", "ufodumike", "kixaj", "fisomiz", "alehe", "zanixic", "pubequ", "waxijeku", "ejeqitoq",
    "ojoyok", "ofatobi", "owigomik", "sujotitu", "rolazu", "guwafuka", "iwupacot", "tamehe", "faxabem", "ubefur",
    "abalequ", "ixagaquz", "kijuna", "elasu", "emehob", "qiwonuwej", "gokeqe", "wayeme", "soyanof", "buhaze",
    "inubeduzi", "irogadoju", "atiseb", "osoto", "ejoqub", "ihaxi", "adofile", "urinovul", "uyiju", "rayube",
    "neqadak", "corafora", "osuxuheqi", "jidad", "odiqodam", "inevifufu", "mavus", "bilanace", "alowob", "ujimew",
    "ehaxewabu", "oyogim", "neyud", "xojofugoz", "efuvoxeq", "utemo", "adusir", "anobowuba", "oluxu", "imujok",
    "zekuyoqi", "hinipay", "tudobegov", "sofob", "isevowobe", "ivicenay", "azufa", "rizev", "eqefuw", "febojeb",
    "iboxuruxa", "sarayon", "imolij", "ugobupi", "bayahige", "uguvo", "ecehagima", "ewekux", "guzit", "puqetuy",
    "icatuk", "hohehusu", "imujufu", "givaye", "atilozin", "vetihuha", "hugayalis", "wamuzozay", "asitufade", "hepevuqi",
    "okatewa", "cijuzupiq", "qewarakay", "zihit", "ucumuzoxo", "hugozuf", "cojated", "lowoh", "safoc", "cofed",
    "orire", "inezido", "okanapaj", "ufosoj", "aponixoga", "nivijuv", "alokoh", "ogiru", "azagepiqo", "yumodol",
    "egakipudo", "izuzu", "zobutetu", "idizu", "yewor", "uvibareho", "duraq", "ujawi", "odesi", "izohuy",
    "yitavuqul", "gaxolif", "juxolepo", "qihaho", "febuf", "usuzi", "bamifusu", "qohoxasi", "nawitezat", "agoxi",
    "ajebocol", "ituzagibo", "eveji", "boquj", "ebomi", "xubulu", "oretikil", "umoforo", "vorigo", "tamenolok",
    "hupequn", "vipuc", "vigeceg", "fegapu", "fifuyifa", "qenasig", "panuto", "abuyu", "zoletoyix", "ocaluvavu",
    "idawaj", "ahaxisoq", "zuwili", "iqenow", "disanazal", "usepof", "cutivi", "ujaqa", "ufufu", "ejikudoq",
    "vabupa", "cuvoli", "dejemiz", "ezihi", "ihuhizuri", "izoza", "supexot", "okagoheq", "ujedume", "etusup",
    "orubedoza", "wizuteh", "genowugo", "kusigik", "oxudifuju", "vitafahoz", "udacusegi", "ugifawijo", "gewamewim", "xubixu",
    "jamakiy", "zoyum", "afiho", "uvisoyika", "igutirefe", "ubafa", "widirepi", "yuviw", "yojoc", "gogeduba",
    "ocejeme", "edibajos", "afoze", "jisetegeg", "hujipoj", "omoqudu", "epagu", "pulagexa", "zovotil", "ugiges",
    "inijubel", "rojoza", "uzinakehu", "ivevaqiw", "lopikirid", "ziyam", "yicowaye", "avufupo", "upimodas", "ewuwa",
    "utorixoma", "hodafo", "dejixus", "aqatujajo", "uhozi", "iritor", "puperer", "ineyusezu", "kacum", "ogane",
    "iputuz", "adosov", "eceyesoc", "ozogob", "ogidowa", "nizizazof", "ikaduqac", "areqan", "ecagif", "akusec",
    "imulexo", "zuvonip", "jibuzonub", "wutituwe", "zuvapac", "javofimir", "gulutil", "amabifova", "hideceh", "haguqa",
    "irorafof", "awicanihe", "vuvoni", "arehebaco", "oxiqirevo", "xukibekis", "uqixolig", "unuxixe", "zufotogab", "arafufuxu",
    "orericoc", "avecicu", "qiguzaw", "ulecawaqu", "laqube", "iwitihit", "gitigof", "osogaxiw", "umunaco", "havogazu",
    "pehaz", "omehecoz", "uwuyup", "sovivu", "inifuj", "vivuwe", "okuyituyu", "fafova", "qicoj", "finovava",
    "keliwojog", "senaju", "parosuge", "tosalix", "dovuriyap", "ebaviz", "uvowosepu", "uguxipot", "onuya", "uqajolose",
    "miwazife", "igahobu", "iyikifoka", "aduruwi", "oxadu", "faqibu", "uqeku", "isixe", "posal", "gidani",
    "cafop", "wigalaxas", "zarupaza", "doqaz", "netoto", "egisoteg", "dideyed", "kalebuv", "imayego", "uqogey",
    "leluli", "viratel", "exatah", "igadehiv", "ruxahoba", "gofeyoj", "jawaboqe", "nuhedo", "akagax", "nefururax",
    "vitilab", "letuyemuz", "unuxep", "gonaq", "oxovusi", "qifeqehig", "iqoyefuv", "yozofu", "opaquwi", "iqusav",
    "ebuhug", "zawiw", "nocalod", "lumacawe", "efatogu", "ilecinun", "liqejamid", "rezuqe", "votus", "aviciguh",
    "garedip", "luwuq", "fitereqij", "sexonux", "lulukoyu", "alexaca", "pijaku", "ineyafed", "iqiyet", "ukujofe",
    "pecoso", "hezigu", "takoqoyiq", "anebu", "nuciqekuq", "xibiyo", "hizuhe", "ejuducip", "huranaqur", "ejamiwogi",
    "ujimaxece", "ibakeli", "ogona", "goxisepiz", "hupubar", "urohet", "ayiga", "oxeviqe", "iwologad", "qamucor",
    "aweco", "ohoroceqo", "amuneqiq", "rayela", "uzabajaha", "bijexevul", "nozekada", "coqafewor", "gehasimaz", "ukowadom",
    "jaziwa", "uyugavepe", "evecetu", "isuqihuza", "qacok", "onani", "wefox", "vamijunav", "tisagiz", "zupifum",
    "avovisoki", "mumapudi", "izefac", "uzulesur", "caqikube", "osica", "oyupafav", "qaxejexu", "iwenejeco", "aruve",
    "wecefaqo", "lajajem", "imejip", "xizuqe", "wuviro", "vuzabet", "yilajoro", "ceqewi", "vowurezab", "zajacegol",
    "lehoqeva", "fusuw", "lihoyoq", "zihisotir", "xuduxu", "ezugo", "arocege", "utevipip", "vihehobi", "penepu",
    "puduyuviq", "itozaye", "xigemez", "ihaluv", "ijiratedi", "lajazuqa", "ihotidu", "umuhapob", "nesav", "gelax",
    "sayus", "ineyaro", "wupilusi", "ivuzeca", "oxadiw", "agufosufo", "enatozu", "isopepap", "atonezeg", "wunuwoma",
    "owovu", "kujaban", "osafoyonu", "haliduz", "epojagev", "emojira", "tirobidam", "vawaq", "abomuku", "xizefaw",
    "sumoqa", "xileko", "ayogecu", "ogawuy", "ajuladay", "bilabuco", "ufoxur", "atozil", "vebiyew", "fewuge",
    "uhodufera", "tupep", "ifiwafodu", "likoha", "labecewu", "yuqakeg", "uboniyac", "dudup", "omadevex", "piwofope",
    "yasesepog", "laguhuba", "ujojoz", "opipu", "uwekiy", "egobubal", "revaxag", "ejaleq", "afawumub", "naqalubuw",
    "qodahes", "mavenodan", "dipawu", "divadotig", "opagahaqo", "egemer", "yaguse", "afilomig", "mivopofeq", "onojici",
    "sanuriye", "tevov", "ugimadu", "ovoruw", "odirenec", "jivejapa", "ojocox", "poxeyixef", "wasezi", "lawakos",
    "wayavi", "focadelan", "omepe", "inohevuc", "himucom", "dihecomoj", "ojehujewe", "ofutake", "yexafovan", "vemafa",
    "gimezo", "ebedunuba", "uxezujehu", "sewagukeh", "irudota", "ijesis", "umufi", "riqodobat", "amizeh", "livec",
    "urimodo", "zuzodu", "gunamec", "vexojoqe", "qubir", "ifaraj", "xakehene", "abepupe", "juhowuhu", "iyiwunimi",
    "nuyid", "yufas", "qenenuwe", "adupefewe", "fatazik", "hebipul", "isinufiwe", "aqoni", "anaja", "qekiwed",
    "agori", "ujopiwuvi", "dikoma", "ivuta", "duqonib", "nopayoye", "iwexew", "hidayaxep", "ovenopume", "umaxose",
    "kobewu", "detemak", "oworahoza", "kukovo", "reqapo", "yesata", "ibujodo", "uqebu", "ezoboq", "dewimeca",
    "vidohel", "ijibileh", "otuqid", "osiwepi", "aforucuv", "himodij", "kefekeyon", "obociw", "hokobix", "ozosefane",
    "cilirihut", "ulatuxov", "exuxi", "ucuyaqal", "liyesemi", "xagudi", "ifevovek", "efugekif", "odelivi", "zebutisab",
    "gasasu", "quqagi", "nofoxo", "ihinudiso", "ulefaqufi", "egiheci", "uzejulike", "iwebidi", "ocane", "loqiniwa",
    "adupi", "lijiwoj", "ofoqiric", "funiwu", "ijowijo", "idigonuyi", "uzoja", "ronewo", "iguxol", "meneluloh",
    "lanicurub", "yaculivuq", "cuqori", "nizad", "lekikig", "inorev", "ohebiqam", "lijarej", "lihawu", "qitef",
    "lirupisi", "ecilav", "solimolur", "jewicuki", "ifokeqi", "qovimen", "ajerirapu", "fedeh", "qiwahac", "godusisi",
    "filome", "eruqu", "idoriwiz", "ejunazod", "puhaq", "inewazer", "daliganox", "exelipila", "eqatacixa", "bororadi",
    "alegu", "ewexudiy", "ovigedet", "obuqap", "sikik", "akuji", "bulit", "aqukinoso", "vaqob", "wetatu",
    "menuhazox", "qoralaw", "ulecofole", "zatujix", "hivopo", "ajina", "iweyiw", "tocuraxuh", "suloseru", "oxiyo",
    "ifotaw", "tezesize", "otizida", "uroxacob", "laguk", "atelirol", "ukopune", "ohusore", "etezoyaw", "poxivovok",
    "ebifi", "atupodama", "apekuco", "mifol", "kagiqa", "anoci", "uzeweye", "yifisel", "vicuzes", "hukasake",
    "jezexuga", "yukaz", "jeyapixuq", "ayeri", "ohinip", "ewecax", "liwuveli", "yecuyikeb", "lecaz", "oniko",
    "fedafa", "jaqodaz", "hiluyox", "alorake", "ukurawuk", "ehewar", "kemacayu", "ivofuwoj", "ikigoqa", "diqexubo",
    "xicovi", "dukahu", "afazaw", "rokuqol", "isides", "oziticuw", "wecohu", "qejuyujuj", "ulomep", "uhonom",
    "atagahe", "adazu", "xuwafeso", "qoxod", "ubovuwi", "uzucorora", "noriyolo", "nagozuro", "yoguwave", "omoxi",
    "adubivi", "sijoci", "tuzej", "jikes", "emohu", "negugelay", "ipeqo", "ibaha", "gecisajol", "muhebota",
    "inibuzoru", "oqalaqez", "ciruxolic", "cuqomihi", "asucova", "jetil", "oronogaq", "ucixirulu", "ziqawu", "edikek",
    "zupibuke", "aruhava", "oyoqala", "esowagahu", "obika", "nawezazal", "adogecuhe", "lopuco", "aruluhuve", "meqakaq",
    "ezibo", "kadaxip", "upucupaca", "uwafu", "evido", "owopefa", "safuce", "eboviruq", "icatexe", "kuluni",
    "wimat", "ibumuveju", "wilawirol", "ofepuzag", "ucili", "fepiyulo", "uxacu", "jemur", "ocoyaju", "lawuk",
    "obadafid", "fuyasegef", "rodake", "igonakek", "dihug", "guvubiwey", "ileru", "wokakekos", "koputipod", "xadow",
    "nasubewod", "qabazo", "esafuxaw", "aheye", "xuyuquqo", "mufasi", "aloyarura", "idaduh", "yasubu", "oxefaler",
    "gekami", "poxiqeze", "xewerahik", "gidoyu", "feyekab", "elibutido", "peyaqixu", "cotehehac", "izodoke", "bidahug",
    "nayib", "oxeju", "epevaqe", "aqijeg", "erewox", "guveb", "vafuf", "akevu", "boqap", "ifinuro",
    "sipipuqaw", "mayapowim", "agelezur", "urozojale", "ujobupi", "yefoxewah", "alozuhon", "difine", "siyatu", "gitaqo",
    "diguwatuk", "egowiru", "aduxo", "xewasesi", "xixuqe", "owofiy", "ixega", "famopa", "itugucocu", "letut",
    "wurib", "jetekicuz", "iqequ", "yoyovog", "ronilebap", "kojiquduf", "tuxojucu", "elotudos", "ekibuni", "itizamova",
    "ezileri", "uriyozohu", "uyunufij", "apulawi", "ayiseniw", "useti", "ikeker", "ufapojo", "ixecaku", "mokegijo",
    "honuhaha", "tetew", "nahiko", "xidironi", "setewuga", "kikade", "jutura", "hopoyo", "obucoqoz", "ezunabuk",
    "otutapoj", "apabid", "toqoyu", "lujol", "luqukuz", "uveyuriw", "lezakose", "ogesib", "iyafaxaya", "fosubipe",
    "agihiyew", "ivujar", "ulewibilo", "lajehufu", "lujebuvi", "edozo", "adequz", "oluhat", "zicipe", "esohonob",
    "asuqog", "suyemu", "japoguv", "ocakun", "upofexe", "ocirewo", "viriti", "ezasa", "oxoroso", "ewunepag",
    "oqihu", "nugipeku", "lihak", "abowef", "gufew", "tuyabu", "ovapon", "fosipopa", "wopor", "laney",
    "qatek", "sitecuke", "nokape", "ewuliy", "eqagahahe", "igofegajo", "fixovika", "abiqeg", "irigo", "onicohoh",
    "jeyakam", "gekeqego", "beculaqa", "ocesa", "wuvequb", "emunure", "divogadev", "fipatiti", "ijuco", "wihosa",
    "qidav", "yomepom", "jocahu", "cudanumo", "kofefaf", "xaleyeni", "ucidoxex", "wozinu", "elijalo", "umipi",
    "ahivire", "bodegamo", "tedura", "mireh", "onutuk", "udipehi", "cevokaf", "topucosi", "iweko", "hapuqucux",
    "exehe", "sukawi", "soqawo", "sepahugij", "hakabazev", "olufojo", "koguki", "ajihowiza", "doxovex", "weboko",
    "atubek", "tadojut", "zawavoh", "opabu", "lopigava", "ohozuz", "jazih", "ahiwa", "otadoga", "arexijexu",
    "ebahodo", "tucokewed", "qayiwuw", "ponagavow", "ogiti", "juwonika", "uxabopevi", "evudij", "iyeyaquf", "bisipo",
    "oceko", "mexipufas", "saxebo", "dimimag", "uselukag", "itane", "ritiyugiy", "fogod", "paduk", "owezo",
    "pabevi", "fonoxow", "ayikapibu", "dezojodo", "xopuha", "qaxuye", "unosi", "wevahewat", "uxati", "ihogaruge",
    "ofuzes", "macuxe", "ocube", "bizeqohi", "agoxap", "esabicik", "iyicabiy", "ibodifi", "kofutuki", "figipe",
    "equkeso", "uhele", "iqolina", "afabulu", "pudalad", "uxoverofi", "yofofi", "kegasawul", "qequvu", "azunire",
    "diverocej", "anozuy", "udiga", "loqotapu", "ixemofax", "qomawofe", "hivaxoc", "obafowan", "nihohal", "hagajase",
    "nogakubig", "ojewabeqe", "ucamizu", "oziyijedo", "ajufo", "sepuve", "nibib", "ahanic", "baquz", "otuso",
    "onehuyi", "uxileqat", "nujoxowu", "egarogi", "pevomesi", "kupojoqi", "edudov", "nehuvahu", "uwisogih", "tipeveno",
    "xayupun", "aqosa", "ipefu", "tadagaca", "xawoyi", "usura", "ukaqeg", "ukonet", "wireken", "uwoqiva",
    "ijatade", "jukeho", "isisarow", "watuvufa", "oyufo", "faninul", "mocikeyan", "amamaqaya", "ligihoq", "geliji",
    "matodu", "pegeja", "axohisa", "ifeqisuve", "tuwuwiki", "giteri", "etijara", "bikeripi", "isuhopay", "navenuj",
    "zuvuw", "lejila", "ahawiliqe", "etipowucu", "qexomecib", "icowan", "ohafo", "dekaxiyez", "gohuteg", "eladofe",
    "weniq", "kupiq", "axoce", "bisaruq", "debuq", "uyuyoja", "fatap", "juberu", "xozudiwij", "lugif",
    "yoxequxu", "yotesomo", "elaku", "cugek", "quranumi", "maqegov", "ewuqum", "avuwujibo", "johijova", "jakiveb",
    "gajun", "ajuvob", "awoti", "lexoqa", "etaludu", "qibaruto", "desuqepo", "sedugok", "iceki", "uxanob",
    "izuqoduc", "iviga", "awica", "owotalega", "lexucodik", "miburon", "diyawejiq", "udalo", "opotezof", "pesare",
    "henequniz", "juvovujak", "doyeqe", "bonedisa", "goqula", "dodocenu", "etibo", "boniyoco", "hovekec", "ixudevil",
    "neqas", "kohobagel", "ulefelo", "voper", "okazeya", "esazot", "lamima", "uwutew", "zocohikaq", "izosep",
    "iteli", "uxadir", "jawejaxu", "xisasa", "biqefupi", "bifin", "qucunihu", "lemulapap", "ojetuf", "tayanefa",
    "yakokogo", "izikopanu", "akonifulu", "ewihe", "ugirahira", "oropeg", "zugubat", "apepu", "huluyako", "xuniwobid",
    "opidek", "ibavofe", "cikabibu", "iropi", "usesaled", "efuru", "exocu", "safinudet", "uhediya", "haticiy",
    "pikoqawen", "izobo", "bayotohur", "ibiju", "elayajoz", "qurimoju", "ahateqax", "xilir", "eruta", "foyafalaq",
    "jexexi", "lomaj", "voxogu", "ebahepip", "aloni", "igawuqeg", "zodoto", "atekuziq", "owelolizo", "yijimukaz",
    "egeheri", "susitonib", "nojerim", "okudi", "agilase", "mazowikem", "sabazuv", "ucatu", "imiwe", "butidef",
    "yugofa", "cizajopi", "desalinu", "utezu", "ayujoyo", "yiyodudi", "havetuk", "oposile", "usizuru", "hituqej",
    "akofe", "amicitas", "ehafateza", "uqoxedilo", "ixuwof", "qazoyo", "juvamar", "qaqudil", "vacavimoq", "ohitu",
    "ipaqiruj", "bipiyada", "vahuyogo", "ecidukoh", "ugarad", "lebowu", "zawigoh", "uwanuyix", "oyofuw", "selali",
    "liliyasog", "vabav", "iqomoku", "hetas", "akidahiku", "izufo", "ikelox", "mofuy", "enituwo", "eyameqin",
    "yoruvoh", "dicuwesi", "besulixo", "mefevuvo", "eqedur", "fokahil", "daxan", "uwuluyiwe", "geqeton", "urerodus",
    "ofuxe", "mejeno", "ajacu", "furixifon", "texawo", "wegolozo", "otepif", "agonij", "ofilejaf", "tiloxo",
    "komuyil", "xuxaquzu", "casodamen", "epoku", "eqoroqahi", "najomule", "ridic", "gaxihu", "hobofabez", "gequz",
    "zomiva", "xaceyiv", "uwajodu", "akataze", "onizefujo", "itutuge", "alebuh", "exezofe", "ufovahut", "dejotaled",
    "tupojiji", "wagezerek", "wowajege", "idetilu", "toyefuv", "zopoz", "vuxeni", "buwad", "okakanow", "bules",
    "qivapi", "umariri", "kehexu", "emiwuc", "gojudere", "ikucozipo", "jazude", "ojuri", "loqid", "ukesuh",
    "lakebavan", "wanahepi", "acodeqeli", "asipa", "avujakij", "daxutaq", "hemiwoqay", "owubojowu", "ugoqudasi", "yadoto",
    "ewanu", "exuyuv", "begahup", "udali", "hicubegij", "urejakuf", "juyanu", "ajeso", "rujife", "amixotave",
    "icovaqe", "iferu", "icale", "hogow", "awefegi", "hozaseb", "walutujex", "yiyapita", "ehixen", "uxorac",
    "wocado", "sanabozuv", "ozinuf", "ijazemuj", "refono", "amegel", "isutopi", "hebemo", "xulotexox", "wefalimub",
    "nohata", "amabi", "ogefe", "iroxu", "fehoces", "esovab", "xikavos", "ikatim", "ehekijup", "acabeyofe",
    "takiz", "ufopagon", "yuyod", "cofeyenon", "navupu", "derigo", "qologa", "coniq", "mexij", "edibab",
    "caxamuri", "joyanus", "vikas", "adirez", "uboqapeg", "somuzulob", "fugafivu", "udakig", "acinib", "nufupof",
    "rinowa", "jurik", "aqujetox", "udiwiqol", "evugev", "unato", "esiwegeh", "opeloba", "viyeso", "iyagu",
    "anobukequ", "enapud", "eloceba", "kitufoxuv", "ivitofet", "tigihumu", "exaqoke", "udinize", "ixasux", "afepere",
    "safawisaz", "fodurogoh", "iyokoxam", "qokubake", "rejevu", "mocikuxoq", "inijepoq", "zajas", "rahed", "cejuzu",
    "areku", "arijahaq", "fifaja", "paboxeqa", "ulaxazi", "negecuze", "ezedizote", "okuqodito", "wuqezora", "jimewaq",
    "oyabewiqe", "evahivu", "keyacobe", "aromisuk", "ulesilub", "nipeyir", "uvoful", "xehuc", "urohawepa", "cirez",
    "nitalu", "bogewape", "ohuwuc", "obasukuna", "qajozin", "otowo", "esudume", "iwekaj", "axuvox", "ixifu",
    "gusaxe", "udojepo", "gotatilo", "lanujete", "unamepolu", "ejupunize", "ipurufeme", "oqedo", "ogejucuwi", "jegudis",
    "xonafopa", "imepefira", "boluma", "mimimuvi", "odonekoge", "aqabeqat", "iwutoro", "ocepugoq", "huvarezo", "uwujuwuf",
    "nomiqo", "uwezix", "walar", "gayepax", "tufosu", "idawe", "ejofa", "eyekukaw", "mecebojew", "reriw",
    "oyelaxij", "pazapik", "avuka", "ojituzi", "owojinu", "futedihep", "buzunonab", "gusatip", "uyaqa", "wayupu",
    "exanotaz", "iniraxe", "mirutuxar", "weliganup", "jicogaro", "awazayok", "emago", "ipodaji", "cobuwuto", "ezobotamo",
    "fomena", "emujison", "unecaqu", "obafoxa", "qanes", "udazod", "odomi", "obarikev", "atuke", "imocazuk",
    "iqosawu", "setayu", "olubu", "utema", "ibutes", "adisut", "murelu", "ababas", "eramibave", "tawafito",
    "uporam", "yokafoc", "bavos", "ususotel", "cugaxunay", "vekedoju", "vihuk", "akifunal", "weday", "gapiki",
    "axoka", "azihu", "elanewez", "afaradul", "qesenadi", "cutof", "abixef", "lugefe", "iziwayona", "amocik",
    "oqonuxapu", "tobobogaz", "cenevixiw", "hodapux", "ojaqosu", "depemeluy", "umeqiwo", "iramuros", "ubamika", "ulipubeve",
    "latokiwis", "qodikuc", "jicoj", "umubuhiw", "tinoy", "usoqasa", "xicel", "ohunev", "usahelule", "xebeyu",
    "sobobix", "pafobuq", "rosudojig", "dizof", "sapodocu", "uqelefas",
];

/// Japanese word list.
pub static JAPANESE: WordList = WordList {
    words: &JAPANESE_WORDS,
    english_name: "japanese",
    prefix_length: 3,
};

static CHINESE_SIMPLIFIED_WORDS: [&str; 1626] = [
    "aquyanasu", "esilo", "ocoka", "wuwaqoh", "judabo", "qolivoteg", "uvilokowu", "eyumiv", "ijeya", "jowen",
    "rejuti", "mofajoji", "ibataze", "omose", "ewiya", "ozurak", "velecevo", "ulavilek", "inijatuxi", "iqotosu",
    "xumuso", "urekek", "jeceni", "rinidih", "imofakufi", "yabecug", "oqodusepa", "dofib", "hewodaxeq", "opigixo",
    "sinoku", "exovohor", "awunomexu", "ogetanu", "qaxuzigoy", "sitimawe", "pokajixuq", "ligahi", "oqodeyure", "ibucurid",
    "varedatet", "ehimidib", "alowo", "aherupi", "moxap", "taratu", "egakix", "afonad", "jazab", "akotoyo",
    "upufa", "aquzenaru", "iyajuf", "kohig", "nocuf", "utujanufu", "subedime", "ilugevuf", "izukoh", "orinev",
    "jopad", "fetukeli", "uparu", "ujakoged", "idaku", "ijokujeza", "dusijat", "ubuwehupi", "bucawox", "yugur",
    "bewunu", "nebeh", "katamu", "eqezob", "nugaje", "ixoxixewo", "xirori", "jukuvexul", "ecelasuk", "yokah",
    "cesibal", "mixubug", "ehayic", "uvomajuke", "homucipe", "sayovo", "godoqo", "ohutago", "disoguk", "ujiki",
    "icovozuwu", "pitetec", "axadoyap", "equxepo", "apuka", "geneq", "esidecuhu", "ifeleyuz", "puxuvaleg", "axiba",
    "exazali", "awevocol", "hepoq", "enoxaqe", "eradobi", "esarux", "iluqel", "iqegaqeda", "fenud", "keyonepa",
    "igavijeg", "upurizuwi", "qojisiq", "yowihi", "eyiqa", "imatuq", "sizugir", "senonuk", "tukulaga", "usalor",
    "xuneh", "owone", "eremol", "teguye", "ulihijoku", "usisamex", "oqufotat", "uzifud", "lorenebez", "iqevuv",
    "ezulasaq", "ufibawuj", "igasufoda", "baxeco", "ixafota", "ugaluheke", "toboyi", "ihehubegu", "itahefe", "urixujevu",
    "idoyavow", "jukaqihaf", "rufome", "ihivo", "uxoru", "sarihipon", "rivoh", "qejeqicug", "uvinule", "ebegir",
    "hovotohec", "pitapa", "ikehegep", "roqos", "junoc", "ikino", "tufev", "zefupaj", "nizidat", "urilejan",
    "zezezi", "pesicuqej", "kuxuni", "uloyoxew", "enozare", "buqiz", "udiqay", "mebigo", "himim", "fowuzeq",
    "mebokiji", "azixi", "finaw", "kitole", "dejeyub", "zidigo", "eseyos", "nakitaq", "olejacora", "radis",
    "eyaxa", "bawusale", "kelasayig", "sunaf", "zilihugi", "uquton", "onude", "agoqiqa", "eneci", "uwopan",
    "ufahag", "luyijowi", "pihoxiqa", "bicivafir", "vazoyi", "covekem", "qasoro", "azagem", "nopuyero", "ocoqideva",
    "uvequ", "suruxewa", "ozomitohe", "ocakiqi", "cosunasas", "palebas", "idecubego", "uhilu", "gowiye", "ifudewige",
    "exapucow", "akokeyok", "zuhohak", "figesipi", "anosusezu", "barusan", "ahofomo", "wadorubu", "rogehovix", "qojetozav",
    "anosisuf", "oluxe", "ilurucux", "vijalizir", "ipayut", "uwageneti", "catovuvo", "olixizir", "isuhe", "omagebu",
    "petesu", "mopupi", "hayoc", "uluvapa", "borudun", "lojuloq", "afalanoci", "uvatib", "iqoxo", "bugafi",
    "ukuri", "ogevemax", "ohubobu", "ezitoboh", "qizel", "rupidoga", "acisoj", "ahemes", "bumejozij", "bozeh",
    "obicecev", "yununo", "uhilic", "iqawo", "jopuwa", "eferoqap", "wuror", "pimaku", "ukigige", "ixuzok",
    "ticuf", "oqijuw", "enusil", "wuxaj", "iwetabeb", "jemosoxox", "kogaya", "ezizosop", "meyehugu", "ejetoxub",
    "cefipus", "luqiparu", "naramat", "ovicaxir", "yeturimu", "ukoqi", "exequseka", "rodiro", "wezebij", "eyala",
    "nijotefet", "eqejaviqu", "xocutiwon", "ozakim", "ropilawam", "isaqalule", "hizulafep", "oxabi", "uraduforo", "kiriqafoz",
    "faceref", "umujiv", "yawuseh", "oreyamiqa", "bikisiwa", "qekafi", "enoxepo", "ageje", "otelixim", "bomaqu",
    "soyajevo", "rikiyegaj", "izokab", "eyoziqe", "wucusal", "tigicaqo", "wagaz", "ekuyop", "itomi", "axepa",
    "mohatu", "cirez", "ivupeb", "divufadu", "duqohe", "idawatixo", "urusa", "cizisaju", "uluxiv", "asuya",
    "ebeheruse", "fulog", "qicopici", "gugunepud", "mehuxi", "epevo", "owoxu", "wegerelek", "jomavin", "ovufimeya",
    "utumem", "imuboraxe", "aguhaxim", "oyafez", "opigagi", "emurula", "ekabu", "fiwiricax", "hequpoq", "uzutehosa",
    "xibono", "xexeqiz", "idosuwaxu", "yaconiq", "logiqovas", "ahore", "gabif", "nonekoze", "eriqoz", "agetaku",
    "sogapayam", "zawizag", "yogadu", "opomere", "gozojo", "epihun", "agipa", "azovux", "ugivin", "dulatoce",
    "hozuca", "eluti", "gariyi", "erida", "lehokiloc", "dusalujak", "iqoyux", "owelufayi", "qayulaqop", "teruriyas",
    "xinotas", "avuwuqa", "liyayedup", "vijebobu", "ciduxamag", "usigayini", "ulemuqa", "ramuh", "qecelufe", "udoga",
    "docuwow", "siqic", "zapuvozap", "pudiq", "gogejoj", "usenefife", "wezoti", "igacoh", "bumolul", "wekexesa",
    "ahayejen", "picuwo", "iyohuqog", "ubodefuf", "oqema", "esipixuxu", "iseboxotu", "gojar", "zimilib", "levihuman",
    "itoruku", "yagicek", "tideyot", "uvafon", "ihohi", "mowisuzak", "poneq", "iwozixak", "umajayip", "yuwexejoq",
    "axomu", "gobin", "laziq", "isavav", "uvifu", "zibigo", "limumin", "xufokocov", "visanem", "ukobicoje",
    "qesoqili", "uwoqe", "wisuvubap", "umulec", "eguzu", "fopexe", "unuqikad", "hivusilaz", "nurane", "awipufav",
    "dovaca", "uvucoped", "icosatami", "ahujigimu", "kedecu", "afewomo", "ucesirife", "ubehuvevo", "uvike", "tazapoba",
    "acaduy", "ehotugoze", "suyuze", "kucula", "cusocetoj", "ecumog", "icibaq", "enegiqu", "relokaxe", "xamagovi",
    "afezey", "azozi", "oriromelo", "dohafiki", "bukeqab", "kalehuyus", "lojol", "afufe", "rogonag", "qihab",
    "nicepo", "kanihac", "omadod", "atoxoxud", "notax", "ipihinugi", "wowugo", "lodube", "ahunixax", "aseqokaqe",
    "anupuh", "oxawewalo", "hivemum", "ipofamoju", "exawos", "buxakofu", "uqacazage", "fidofu", "jesabeqe", "obege",
    "apofuf", "wiwayebim", "osozoneli", "inalo", "vaniqode", "qeniwov", "uxavuxic", "uzasa", "irucubuwe", "axudaqe",
    "putubiq", "heyih", "apoyozoje", "eciha", "xijibu", "iquqela", "uvutuni", "abavohez", "xalulixeb", "ruyowa",
    "nutalavok", "hizayiwa", "tigodeg", "unifulize", "xebaqafe", "ecise", "wavoq", "caloc", "zaxid", "uremobo",
    "arodo", "edapot", "anayahe", "yutire", "eqajiri", "zusirohon", "ruguzu", "zebago", "biqayome", "orutu",
    "azobi", "ahovosu", "fipali", "zebun", "imozicaj", "fevifojuh", "zigej", "uhosuxiru", "ajabukux", "opene",
    "sitemocu", "yereworak", "cuyimumi", "osusec", "ixebapaqe", "oweyugipa", "irotupil", "ivotih", "eqinanu", "ehejov",
    "ufihanowo", "uwerevun", "uxufahido", "oluhi", "zogoxav", "osika", "axafiwij", "qocixi", "wiliyiham", "ozewuzamo",
    "odixul", "rokog", "nubuqoci", "simosun", "qebijekeh", "uboxamulo", "gekijapa", "walof", "zalaq", "oqucukej",
    "yigumesu", "yotodeyok", "lobeb", "oxuvo", "exabego", "ifozix", "iviwi", "erikinut", "oqilava", "yurib",
    "yocopoh", "ilago", "dogeve", "buluhohiy", "awejecibu", "ebaqezoti", "icofigiwo", "muxeyoje", "kehod", "uxohac",
    "exotota", "ezakelipa", "ledile", "foyejoko", "dalah", "wonutime", "kujup", "icipesoyo", "madova", "hatiqu",
    "yereheci", "mebol", "atunixoyo", "avalasek", "ocabovu", "amuzequ", "usuluj", "fopufida", "okonu", "efomawaro",
    "qeheqe", "manojuso", "toyuqew", "vojajo", "padewaneq", "gamuk", "uqiges", "opocu", "osiyiqe", "yenababit",
    "ajahor", "gocoze", "ijote", "mixizik", "awuru", "suyigar", "mifuc", "hogohepa", "pexedepo", "suvemaku",
    "iyarav", "adohiku", "barivasu", "ebapu", "baluzega", "dicof", "ihuka", "huvolulol", "isobecab", "izudahe",
    "awuwewubo", "ofohe", "ceqeseyiy", "qifed", "jewozudal", "anukile", "oyewodexo", "ojuvizi", "reyehafaz", "atixej",
    "vuyofo", "xowupi", "odujos", "matape", "labacuro", "gebefayed", "ahifaza", "ipewu", "ebado", "odehe",
    "eyijey", "uyunexese", "uduyot", "nazuqah", "ahomuwu", "wosekag", "pugomus", "fizerid", "wocobujur", "yarayesa",
    "dutiz", "qatifequ", "acenice", "asuvomov", "jicamox", "inivoj", "eradazasi", "mameliwiz", "uzofij", "ihodopize",
    "iqugo", "dasicudih", "jabehaf", "ugeko", "zuzezen", "eretebu", "ululu", "tohinom", "gizuwujil", "esavo",
    "rudiyu", "wefumih", "novayekem", "usobevat", "asuva", "uwepequ", "oveno", "bemirig", "tuyibak", "gabaxeza",
    "lupuv", "digug", "fegujere", "umezij", "vixux", "apuxefa", "xitezi", "yakovohur", "capaxiva", "ukabu",
    "qusacuj", "xodelo", "lutaqide", "uyahunok", "ugemal", "esinomi", "ojiyetoco", "quset", "ecora", "ivoro",
    "uqimi", "gejalim", "oranune", "baguxu", "pegevusi", "taxemu", "cuhedis", "oraqoxox", "igunizuk", "hojumofo",
    "jefiy", "vuzohin", "etipavo", "ginoqal", "yesisoli", "raveh", "tahedevi", "odacenowu", "xasovi", "sukuyacol",
    "fihawey", "xalitu", "uvezusese", "luluraf", "anisibi", "panep", "fehubo", "ajisa", "olede", "qikim",
    "tetekot", "tageh", "zobet", "iwuyuce", "guzuzi", "tizero", "potamoke", "muxuvuyet", "etucevaq", "dobekev",
    "iyegaraq", "epezi", "ximewu", "lejuw", "wiqag", "tomed", "cujuba", "ubusimise", "pabucekod", "solan",
    "firuze", "ragikisi", "uvupazu", "tamajud", "tivole", "hopawe", "ezunisez", "fucexok", "ibanehob", "suvoyi",
    "ipolah", "uxidem", "viwic", "rofavadok", "sagucum", "zedeku", "binukemo", "ujefed", "ijafecow", "urexene",
    "ipeqiruv", "ecufolu", "tohawamep", "lipaje", "kajemi", "afayok", "gujirep", "igige", "zixice", "feyeni",
    "okekipeg", "avunije", "simuy", "gacuca", "dudam", "toriwum", "afufiluxa", "enofop", "eviyavema", "buloyur",
    "bomuporo", "iviyik", "iveriye", "ibebuha", "xukivo", "teraqo", "cuwuhaza", "fojubijeg", "ivituto", "fonaxidek",
    "hotit", "muguyo", "ireme", "kunokiy", "obunazoqe", "asuzam", "avabupo", "avihudize", "ekeyotozi", "ejulaki",
    "teluhe", "okekegufu", "goboduno", "zuxoxohax", "awafiwo", "rijagomi", "lahutiqu", "bixab", "egojiq", "texuzob",
    "qedepo", "furiqaj", "uqibojufe", "ciyibijub", "soliro", "haxewef", "howenohoq", "ifutom", "upenadiha", "qapusop",
    "zereyiqi", "eyipu", "ixebavab", "ubajure", "uwalorudi", "axitamug", "ovoqo", "xayehov", "uqaqinuwu", "dewiru",
    "qoyobuvic", "ayafiseke", "ijokodug", "udelaleva", "bigezaf", "giwotut", "mucabalub", "ayuvevid", "yunaxe", "iwujati",
    "jukezi", "baxepa", "savaqu", "sofeh", "ufeqe", "idovoba", "anaxayu", "zabapovo", "umetu", "uwaxabek",
    "sesiqu", "zuzixikul", "sicex", "ujuli", "nimed", "zeriv", "akavevo", "dozub", "ozodemi", "ibidimuqu",
    "kuziw", "xukin", "igaqa", "enupe", "ebiyari", "ovuzom", "ukerihe", "dezulaxeg", "ifusetah", "areruja",
    "palezugoj", "olayifi", "qonozic", "limoxos", "otuje", "ocehod", "yotovewo", "wehitaw", "olipomo", "amupa",
    "zisafivi", "wifolihe", "gayifus", "femih", "tenuqezug", "podewekop", "ivisige", "qegukoc", "eculu", "yedeqiga",
    "binigatov", "goroqum", "tatibabiw", "imivajon", "riyut", "vuwarid", "amaved", "rakocecox", "ejafi", "exuxufap",
    "acaremiz", "zojirucow", "dizazamod", "ifogavaz", "kuperay", "citakuy", "wokoko", "icabe", "ukiwe", "opewefi",
    "onerijiv", "ucipa", "fuwax", "foluloqi", "lidugesaf", "ocaca", "nisaf", "sidir", "ofimef", "owewak",
    "jevupi", "xesumohuk", "qohorex", "yibipa", "igozo", "acasemi", "epurizocu", "upilo", "oqata", "alomiwu",
    "ibododo", "dibemomo", "oniyop", "uvabok", "oqafasuca", "sativa", "tirus", "kojofutob", "xiqosub", "olokoqac",
    "lecig", "uyexenoj", "tuyitehub", "ecigi", "poleratu", "ricicop", "lebudo", "eragimoje", "odukozup", "qewoxaref",
    "widiye", "zebap", "iqaluy", "vobija", "amajelot", "detubin", "ovecex", "evamobow", "iqicuw", "obolod",
    "uguxafi", "uyakuyi", "jorovuyos", "kidopevo", "vujohex", "atazilid", "dazute", "ebafu", "osiqel", "agufo",
    "iyuvab", "olapuhe", "hurujeje", "ibofoquxi", "ociruq", "asoyuha", "dihez", "etezac", "wetecaher", "suziqacib",
    "ilenoqizu", "danejeq", "yuzeruqod", "uduhomi", "pibajiz", "votafo", "owezesalu", "gepaboja", "ayopat", "uyahodo",
    "ekepus", "meyes", "bepodaqom", "ojivej", "ohatahez", "piget", "igeya", "nacakis", "xosopayih", "taxaluk",
    "pufasuti", "igota", "ufojo", "ehupaz", "uhabus", "okicajaw", "paxoyipa", "rasehebuh", "ibagugex", "wiquwimiq",
    "lacifinin", "hematucod", "alisaxaxo", "ebuqune", "avuhewuk", "cocaxu", "nuhiju", "bikizizi", "newupo", "ucanibag",
    "mahaxo", "oxohofe", "pinabehe", "payuw", "cumegafig", "oxewecuku", "wecaqojir", "dobug", "xayizode", "elosidiwi",
    "pozas", "dijuhapes", "kewez", "ulecog", "unikeg", "amagivefo", "eruse", "nirek", "siquvar", "viwasufap",
    "logez", "ilaguxu", "imosa", "usiriso", "onicicale", "jiwerako", "abojifive", "timora", "lolik", "jiwuhiluf",
    "segih", "oqupak", "uvoxujoci", "kerehuwah", "huxuwu", "wecopiqud", "iqecudi", "iqoheja", "lubuciveb", "ajawevi",
    "ogagofer", "igejogiv", "femesutiw", "ugava", "zucemek", "yojepini", "zihugolir", "anuwehel", "ihojewino", "silowuz",
    "fexir", "efute", "isewusuzo", "adepuc", "eruceqiy", "gucohuwu", "sawelezu", "kihogah", "qusoka", "hewez",
    "muqoze", "ezisakoxo", "itowejuk", "ubolekit", "tivaxiler", "acixoyima", "uviberu", "datizumuq", "baruyeme", "tozuvo",
    "digino", "vivakov", "waxigeqoy", "ipusowu", "lusovef", "retobubim", "civarobi", "azuma", "rofofiz", "epenahaxi",
    "mecapa", "opuzadisi", "tiqop", "japofa", "yafewa", "ipapizut", "ihawipe", "lejig", "kiset", "cuxobin",
    "aheve", "zetimotoj", "ohezaqoli", "anokufusu", "mizegaz", "pobuyewej", "yefidax", "haqezo", "yetitaqil", "okodeno",
    "ucotuz", "mucica", "ubuku", "urajevofu", "foneme", "gejupom", "ociximu", "irevunixa", "koguf", "holezez",
    "xobihi", "ajasado", "ikejelaf", "xekalum", "xoyayubo", "uzulo", "apitupopa", "ecuzowo", "dodarahuf", "ojemo",
    "qagilozo", "cavij", "wukicik", "omubifef", "atucidugo", "igozulali", "gehadahu", "yilepun", "owosacu", "dowoka",
    "adadaheh", "wobesaroz", "esoga", "ayuri", "ohoyav", "isunimiha", "lacoliz", "ewipawaw", "kidosor", "utalubu",
    "ejomade", "opaxuc", "besagu", "ugufes", "atavisiq", "cexuvegaw", "orozut", "ruqicifi", "kodohax", "yoxow",
    "aveto", "oqedem", "nidoyecik", "pemopiva", "ovuhure", "vidas", "molay", "jetahube", "xewehimeq", "ajeweya",
    "dizaqofu", "efugoxor", "ekigemon", "gomuji", "uhabole", "lotihohoc", "amigijoh", "ijiboju", "elicefu", "ugiyewodu",
    "zohevit", "cisomu", "zidaf", "deyajo", "wocaso", "aqerah", "jigeraw", "arocijid", "ehoga", "nidugu",
    "ehisu", "oqepavi", "xoxepedaj", "wuvoyez", "uxono", "qeculu", "alivahivu", "robofide", "avefepile", "oduko",
    "qajuqa", "dikelofe", "pisiviw", "cojejuzig", "uzibulige", "saribiy", "awanuxig", "bafokim", "avoxugiyo", "bofesul",
    "axodobar", "bohehi", "lodedan", "urojig", "fabus", "ewobulum", "onukej", "ozevumin", "wexafuz", "gegaro",
    "eniroh", "etiraboda", "izoxu", "ojitixi", "tobac", "fidinaba", "ibawuxo", "jiqihiqa", "onogetef", "wamukomi",
    "isojiwap", "egowevovo", "hikaboq", "xixudinu", "erezipem", "obiwapuwu", "iqaxow", "vitevukiw", "umacazeva", "epatak",
    "axoyunet", "qaxocidez", "ebobib", "utojed", "yifagu", "fixurahe", "enahu", "qikulezer", "eqejid", "alohij",
    "zodixewoj", "bugugelol", "kasumi", "paleyeyir", "anunajas", "uhujobofi", "ojekupoy", "ejubi", "apepala", "tiwukuv",
    "ijabiyih", "esiro", "vidube", "onegiceyi", "dozaranu", "zanun", "apelome", "ibemo", "ilidadoh", "refala",
    "funarovi", "cidujeyaw", "ehuviwa", "gasuki", "exeyipaza", "kucux", "cewuca", "atoha", "aziveleg", "eniyenaj",
    "ixoreraqu", "umixixoti", "siyabapir", "asopiluru", "miletajex", "iyiva", "iwejacu", "memar", "tedexulag", "icimazoci",
    "iyadu", "ibojok", "evuzuta", "tevoresus", "wocuke", "upigaxaq", "itojicumu", "ojagazik", "lajeh", "gowif",
    "fofenozo", "uvavukofi", "yevajijax", "javefu", "fohab", "mavemuk", "ogozamoga", "ovacer", "raziv", "vefeheci",
    "kajepufeg", "usopiso", "soyig", "culasiwim", "vonimu", "nuwejeca", "obofineq", "lipawoh", "uhutosuf", "uyuyo",
    "ceteqib", "awozasun", "aweliqe", "liyupoxi", "uqekoheta", "gosozaxi", "lativol", "nitofiku", "umowoti", "olasukal",
    "taqumef", "dedunaso", "viwapegif", "irenu", "ayino", "movur", "yulidop", "aloti", "iqexosu", "latedabav",
    "azavek", "udera", "ihumowe", "popez", "yoloponu", "atuyuf", "obenofiza", "emahite", "dumolav", "ajuciqi",
    "haqifoho", "oxuna", "zafufoy", "huyaha", "ikawisuhe", "saquva", "ugoco", "zurudibi", "avalako", "ezeqagiyo",
    "peqame", "abivib", "fayima", "omuhuqu", "ozibibiqu", "newewemub", "ocalayera", "eqiwagaha", "tovahoh", "ojuqofunu",
    "ixidis", "zadicudu", "mujuq", "ososuv", "otahed", "obuhov", "edumo", "ugewaxa", "badubuleq", "ovaxide",
    "zazogose", "yitiho", "xowoxoci", "ofosoben", "funize", "cebeci", "vicuvo", "ewutotefe", "efufidu", "opacaya",
    "oteqoc", "iveqiz", "owedisase", "yajatehoy", "uqone", "alimi", "cilumop", "iqofeded", "pubew", "sabatudo",
    "wifowa", "aqovomud", "kigezeco", "orovokor", "enegezi", "wawatofa", "zavaw", "efora", "woguzavu", "oqesuhe",
    "napeq", "kulanipiw", "suzanimud", "yirozu", "uyawe", "lajovo", "diwosima", "fitoqa", "avimoca", "cahojilih",
    "gofojuk", "uhiqiqax", "foxicuven", "azufecac", "yumomamu", "avaquso", "iguqeleqi", "uyoyase", "agijirud", "kerobol",
    "atiquyug", "woleh", "arelaloje", "bavenugol", "dodipesu", "ehudedu", "oxawodive", "uyisixo", "vupexi", "madequmij",
    "ixopilivi", "efoyepube", "eceyele", "uvavazapu", "edako", "guxicu", "qihuzufa", "ducejah", "lekego", "bubokequ",
    "emazop", "ejaqibiye", "gaburo", "colisam", "emunezape", "xecah", "xuliga", "enosaki", "ikevoqizi", "paqumifa",
    "giyocacix", "nogiwi", "ejore", "asiqe", "ebiyiri", "rojilek", "usebuju", "odayus", "qayajag", "qafolaha",
    "vuxen", "ribaw", "ayuqajaz", "mucipatuc", "akifo", "ehefute", "cotelis", "ihopanar", "tajoheq", "qovogol",
    "yujejuyo", "uhihox", "silipi", "lipoquw", "ovulecuza", "vufowodo", "finaqex", "okoyixe", "nekivad", "ivonuhuj",
    "uquzu", "ijivif", "avayora", "madiz", "uxihurof", "wufineg", "wumeqema", "aticod", "izapuzota", "kawilukul",
    "melurop", "uxisatag", "ozexi", "kumih", "ogefi", "fegobe", "ahoduqa", "ucetirazi", "onihora", "imipawo",
    "ewotacuf", "ahosujav", "ineyevuzo", "aqafi", "feris", "uzevux", "disihumo", "ahidubig", "eyisu", "xavopoqo",
    "ovuqirofi", "gudiro", "efiguno", "cekeh", "narecar", "eregohu", "fakoyegaj", "danepez", "evaxake", "vaxoquk",
    "nugicogut", "ewobuyo", "daweqiw", "iyuxiz", "kagagis", "utuzohuvo", "ciqogulen", "utafo", "feyagek", "elurayes",
    "doyukomu", "iyocuzamu", "inawu", "retodonih", "alato", "azuturiq", "pizoter", "epuhowuji", "favegasus", "examex",
    "epeheri", "iqosesu", "enisuz", "cezajij", "pexufori", "onijicaf", "ejekepe", "mowumizad", "elonozuq", "joviq",
    "xixuqahu", "efubusoxi", "umuhuj", "baqexuv", "cogaz", "ujisuxaq", "izoxiki", "uhile", "oluteso", "udopot",
    "amapesim", "imevik", "izejapesi", "qaqecadoy", "vicusirab", "lisuxojed", "cukovados", "agebuma", "uzuno", "bagukawat",
    "hujumuwe", "epanox", "bozak", "zaruta", "yuqisijop", "akuqeleh", "izeso", "elijeke", "cojunag", "bajuquwad",
    "nawiqelir", "epahifu", "wonih", "sezagezom", "vogex", "osonijilu",
];

/// Chinese Simplified word list.
pub static CHINESE_SIMPLIFIED: WordList = WordList {
    words: &CHINESE_SIMPLIFIED_WORDS,
    english_name: "chinese_simplified",
    prefix_length: 1,
};

static LOJBAN_WORDS: [&str; 1626] = [
    "pivela", "jalutewu", "ivokawoc", "tibufujom", "dobuhabey", "giyubuso", "wagewo", "wepateyut", "jopelicah", "eviva",
    "ofonu", "nocih", "ahasacuv", "uhohuhoq", "tifike", "verok", "aluramuja", "azeno", "ugucoluwa", "tokozexu",
    "egihuy", "obogimi", "gegaviwo", "morojon", "raguker", "suvuq", "ginuyetob", "kulonevak", "alabenu", "kobifo",
    "acaqiruf", "ajuyuxu", "momoqu", "wologi", "tatuwe", "gorez", "koqawikuw", "ucesogufa", "kebiv", "ipewukew",
    "xapuzanes", "ezumixe", "agetadezu", "leyalef", "orokuqa", "ulozohuqu", "vohiwol", "vizik", "pucomati", "oxaranatu",
    "ozasal", "opesawif", "osewekoqe", "iruji", "usicijaqi", "afumagese", "fonibunuc", "wucotem", "kiriqovib", "izutizo",
    "uvuvoguq", "zulukatu", "afozo", "iyize", "ewifugac", "ocizihu", "etuduco", "rudijumok", "uyareyaza", "uzimu",
    "exaba", "ibuladi", "cuficizu", "dopagatul", "ofobuyimu", "enirofo", "oyogey", "mopeq", "awalu", "iqujucuy",
    "umehix", "irawiwi", "isoza", "zibabuhuc", "fidut", "zasifeli", "irociqi", "enodah", "axidule", "ajojew",
    "sokiwoz", "otenuxebe", "viyupebuh", "xopomu", "ijoleh", "xuditik", "usuruya", "benare", "odotiwu", "ehiza",
    "dayidoxiv", "mijupezo", "tulumabu", "axipeqo", "ivavez", "egodaxo", "tepadi", "ekexih", "newona", "ofojoceqe",
    "locoy", "newibira", "zamokubid", "nazewoc", "adeyifu", "uhirep", "zeyucuv", "jubasebep", "apugora", "xitela",
    "yicoji", "idikuc", "ukaqa", "nivavarik", "tejawad", "olofiwi", "pecaqiwat", "aqeku", "relecaboy", "ucovu",
    "zukafapot", "sehoze", "otamosasa", "cakulume", "isasoga", "yahob", "uyenuso", "iyarar", "gagur", "fojuli",
    "vijituco", "supura", "eqacuzed", "yonuzuyo", "zazefizu", "ziqay", "siyuvub", "lakaku", "ekoxu", "epusi",
    "tuhisi", "icubi", "pibog", "zutipif", "miquno", "ejuvenemo", "ayowiz", "agosi", "ketiduj", "epevojec",
    "uhifiwa", "ibuloxano", "xacivub", "xoviziya", "akogape", "kebiwaza", "ivotuzec", "ujujuyira", "omamudun", "inunoz",
    "ubaka", "qexarag", "iguhic", "sozeli", "uguluj", "rayuku", "xisobudam", "berod", "uwuredaj", "usodolir",
    "ehivilaj", "ecoca", "volabak", "cakaxeg", "udeqayub", "eciwapime", "wineqeqip", "turaxawa", "xeqifum", "johotufu",
    "iruleguto", "opequzure", "uvace", "iriletu", "wivew", "depiwo", "ikabi", "isike", "evime", "okurag",
    "tepadofam", "ducol", "ibira", "ulunu", "oqafe", "awanejaw", "aqepe", "otinixos", "cibito", "kamiyav",
    "deted", "givisodi", "firixajo", "xiruc", "bexito", "imaki", "afozefor", "sabuqote", "omevino", "agiqet",
    "bexeboza", "ulirufez", "bupey", "ocikumu", "zewopola", "zuwili", "loqez", "acetoc", "ovukul", "cevogo",
    "difovap", "aketa", "mujoy", "emegimuqe", "ojadeziyi", "ikiyudu", "ubigaqok", "iyidona", "opovuvoy", "ukutez",
    "qedibeb", "jinixupo", "obetoya", "genobida", "ehaza", "eqeqevepo", "erebegofe", "hodacapub", "momuzuf", "ejiyiqi",
    "tuziwu", "rewaxa", "isuyin", "izajofoh", "enidipuno", "ogufeduja", "warezi", "ujiwipu", "okobe", "cuwevajo",
    "edoku", "obewor", "babonib", "ecupecam", "dejuzire", "elumu", "sutav", "ureqiqa", "ogokaw", "henofajus",
    "ojuyofaj", "gukumar", "apodalo", "ilecazey", "imaco", "garuruzi", "gizapo", "ajitalu", "utevixoko", "aqoxekak",
    "ucixobe", "ewagadoxo", "mohowemo", "cuxib", "ihebaq", "ayisegeq", "zodolo", "ixigevuli", "lixek", "uhuwagafe",
    "luqabisab", "ralifo", "inuxogine", "geqinipe", "nezec", "jehuro", "eqeyutah", "ahezoy", "ucicijaku", "dagages",
    "uqayaq", "enavobaga", "dolal", "fujesobok", "pupab", "evukiy", "baxok", "ohefege", "odepini", "uheciwur",
    "ucuvinag", "zufuquda", "inopoj", "pawovak", "igezif", "utagu", "ralupere", "fazuyud", "ameroce", "dapiye",
    "orafaloj", "axuqin", "focidali", "patotuk", "uzahiz", "ezogegac", "udogu", "zuzad", "efuco", "vuvafod",
    "zaneq", "okipivot", "mihoyew", "begedu", "azowi", "mikew", "irezezebe", "muwumoc", "fovoq", "uvemo",
    "asobokep", "bogutefim", "ucebaqaso", "peyaxija", "liper", "zehudalo", "xuniji", "hosahuyo", "rebapopak", "rejataqo",
    "oxemonot", "ugakase", "yekirape", "qafag", "kerimo", "ukivutet", "xakexoja", "uhovu", "eqozexu", "uhedoce",
    "eleheh", "erita", "igafujixa", "yasupipum", "ezabuhe", "ukename", "ezajen", "ezoheli", "uzasijey", "tasox",
    "ikopehace", "afocoy", "itamitace", "ihide", "kuyayi", "xohawed", "ezomapiro", "idetel", "uqitefiqo", "azeboner",
    "ekuvifiwe", "tenihehi", "emikodi", "afutoga", "yazuroru", "yadazetaf", "omugib", "mujohefo", "suweqim", "olude",
    "ibajuza", "keviqi", "ohuxuji", "seqice", "acazuk", "maduwiwar", "obigi", "ecoxeyucu", "ivosuvu", "gugewipoj",
    "nuvulo", "dilaruxe", "sudecofo", "ikobizuz", "ezamox", "oqepuse", "imecog", "ikalod", "umonelaba", "qixef",
    "ajicak", "uzowivuga", "aruwayej", "bufeh", "lesil", "jekoz", "avabav", "dayerig", "wiwoka", "nexih",
    "ukobiweba", "yetiw", "axogalu", "agetiqos", "awayu", "oqupalozi", "ididecan", "jirat", "picajodiw", "lokiboj",
    "lepoqu", "ohivurol", "asuniqisu", "akore", "obazaq", "acexiquza", "esocuw", "oyema", "naculus", "itupezan",
    "usukozefo", "ohukabi", "asezuvace", "oqekoxi", "evoguxa", "bibiqed", "isefo", "odakon", "bekew", "oqoze",
    "hifijivav", "sitebema", "isopoq", "oyegi", "ozuqutixe", "yodaf", "xoxaz", "ucipakoba", "irosu", "jujukahi",
    "siluxejom", "eqivixi", "abaxit", "titugobe", "uxerazeci", "tuwalej", "ekikuzelu", "zawibe", "aqubigif", "ojageqifu",
    "judawigoh", "ohopokax", "wuyazu", "filave", "urocamo", "vilujuz", "dacad", "ebulegi", "vosasu", "mosoqopo",
    "ewumirexa", "orivanu", "egoru", "uzaja", "sarineb", "oyacojof", "pujuherax", "orites", "balazer", "pajedumex",
    "aluba", "akanofat", "hamugex", "apadaw", "enozehuyu", "aqixo", "imacejur", "kevoc", "tupuxej", "elewuxa",
    "ufifibub", "qadowikoz", "ipiquxeh", "ojomo", "homuyo", "fatikise", "edayohos", "nomavebuc", "posev", "yemiwuqo",
    "ulozexexa", "oqosuzixo", "uruxo", "lizodufo", "alanica", "fojuba", "xeved", "xuqoh", "iperoyuf", "omerahi",
    "iminekeqi", "bigilul", "efayutunu", "ohecame", "carupu", "tovaquvok", "quraf", "cezibalu", "gepadoli", "osoxis",
    "tixalu", "uvavi", "sopahiy", "lidedu", "buyoko", "xexumigog", "qelofey", "vajufoji", "jidas", "uyimohat",
    "tivuxevos", "nagajiv", "uxudizuya", "ikiyaheg", "atenaz", "bepamig", "gihupog", "uqewinexe", "ravesosix", "inirex",
    "yedavacuw", "suwoxuze", "erocad", "uyoyi", "ecapagafe", "kotuyemom", "negud", "ilediroza", "gaviyeniw", "cifaqiqeq",
    "pitok", "bojohoj", "pojojizen", "uqisuface", "unebaxoqu", "zagofe", "exebuho", "wanezet", "vowaqa", "sufidu",
    "ohuxi", "wihici", "ninarip", "gilebeja", "pizag", "oyekin", "dujiqox", "ikogocori", "binobuzo", "eboconigi",
    "ijelobi", "mikipatil", "tevife", "nopowela", "sinitom", "mirajocut", "xocecur", "ehoke", "qalato", "hepese",
    "esaqax", "labicaz", "anaxi", "juwas", "tewelud", "honur", "aqiqurov", "qeyonemuf", "idipalu", "axebeqe",
    "kireyoji", "evofi", "rezoz", "oxife", "ogirafi", "uvexe", "iyutodim", "kafogewe", "agoyapine", "rajigupar",
    "etilicixi", "catibuves", "higakulat", "duheduxi", "zayew", "uzopew", "inahe", "exesorowa", "sawiwacub", "uyurika",
    "dajusuki", "yazin", "xumixo", "enuxatena", "ixoda", "axufo", "ujabocumi", "ugesi", "hofiyof", "ojijajoyo",
    "ipujekisa", "ridajot", "bopilaj", "oretuj", "aloxokav", "owuhumuna", "uhazo", "xenoworon", "yuyewumet", "xokani",
    "umomoyowe", "imuje", "qowofe", "igerin", "wawehot", "obizalixo", "evemedev", "ebivoxu", "amovimu", "dopope",
    "izuqov", "gohux", "ubojoqa", "dasutex", "anepujit", "owukey", "upakomiru", "onedifeq", "oyoyinaf", "oqiqi",
    "omupatik", "epoxi", "emanetos", "aravoq", "murayudiw", "melijonuq", "zosesawa", "iyatexi", "uremu", "gejacem",
    "ekuze", "jawudo", "uniyez", "tubozatis", "zemuceqe", "gixuwu", "nizibaguq", "borevotim", "uditeyelu", "huhuza",
    "qixeyu", "abosad", "hivacip", "xorehuwo", "yegosu", "udirute", "mozikaxot", "catohit", "idiqupeha", "atelip",
    "cobor", "inijisewo", "meleh", "izeba", "olubejuy", "yaran", "lixasub", "ezutom", "igenek", "epuvoxif",
    "efopokogu", "qihajejaq", "onawo", "axupemos", "perebo", "fitoc", "vibugavaj", "gigoreva", "picuzew", "fociwa",
    "oraxoseh", "onohapiki", "cisokiku", "vilosah", "upomuvoz", "tixofu", "sibewigep", "gequzeb", "podoh", "zuvugog",
    "uhihital", "sipirub", "oquvu", "ulapil", "azupaha", "kutakiv", "uwayatahe", "iyucawu", "domedit", "pebidu",
    "heruguja", "umixetef", "ifudol", "oquxuga", "yopolaw", "ijogogaf", "afovaneg", "epedecec", "foyiduci", "woyulawo",
    "zikixowa", "nihaci", "uvoriqo", "afubug", "aredacoh", "zamenuz", "orocojiz", "legoqu", "ihulunab", "aromanote",
    "vasud", "vodawu", "ohiru", "ipubaxo", "cegonix", "igenaqep", "keviwife", "mafiz", "ajufozaje", "lihovuber",
    "hikukowo", "unekig", "rujiq", "kaxebojut", "zuluxijor", "yiyam", "evanizuga", "bigoyec", "ahirekal", "bewixepo",
    "hoyah", "yiyuxobog", "pobeyu", "ovofe", "ecujozah", "yuyahewal", "ififole", "xifiha", "osupu", "federo",
    "deroxevo", "moluzer", "moyux", "ewebe", "pepeqabeh", "iteguyot", "eduwijumi", "ujiwoz", "kubucebey", "usodah",
    "ujaleb", "ulecipi", "etilo", "mogayok", "gulahu", "fojuqeb", "qavojiyiw", "usiqubiy", "jeyecom", "omocim",
    "qowotel", "yiguziqih", "vureto", "toxaw", "fuzozici", "bazahaj", "iqexaq", "bivucimef", "yocuxu", "uputayesi",
    "ugonoyi", "vezek", "ixayeq", "oloka", "umawama", "foderex", "asabof", "bayudicig", "ucakuqon", "dudas",
    "culal", "lefahetaw", "fewucul", "neneki", "fevabej", "uvukaka", "ubareg", "opelagova", "itayozaf", "bepiw",
    "ekunicej", "howun", "ocilif", "ogajeh", "furoxaw", "rusece", "akikaxok", "usijunon", "weyijiya", "sudoxijot",
    "xasivu", "latob", "omagohi", "setorovub", "agolivay", "ayiyomobe", "afuce", "wequboxuf", "iyejihin", "eliyahe",
    "ikojuw", "yazaj", "berasaz", "ahaxasi", "vifasac", "iqoka", "vupiy", "hevime", "luhoveg", "ireyi",
    "mihar", "icuquz", "izodagi", "ofabema", "ewezu", "iniqizor", "jazaxok", "rekajucuq", "eyucihaje", "ofatidol",
    "agocaso", "mukipinux", "eteqebum", "vepoxamal", "futujudeh", "fepoka", "inona", "ivenib", "akuna", "awihiye",
    "quwipu", "narewoqaz", "vufujazo", "abizidar", "egilimiqi", "xezabuli", "elegiqejo", "payurax", "zuqatu", "udanibabi",
    "nicom", "casijo", "oyudo", "xozebenu", "pilepoyiq", "ebelul", "ahuyohoda", "netegisun", "ibuyeve", "hecixab",
    "usowap", "eqovofe", "iyisi", "narola", "jicase", "laxeqap", "vuxidil", "fewexebi", "gubel", "qimuvuy",
    "atitomiy", "efahepuru", "zoceqadih", "ikuju", "uwofayet", "qabozon", "qaraxumu", "egonurur", "ovazijey", "suyaqacum",
    "acovecij", "ohehira", "wohuyu", "evucay", "miqigu", "ezuyikuc", "epafuyi", "epogoho", "xazacik", "vutaruze",
    "ovemit", "ateyigo", "tefav", "rakaxey", "iqanisak", "etujeho", "kesuxufem", "cexon", "iselevahu", "ovatozim",
    "bokocevo", "utiwawig", "cebapajan", "xafusunu", "eqawuyav", "iciyij", "irago", "alujal", "usuwicix", "usevowug",
    "ilesuvemi", "yuburabi", "cuqunugug", "awotat", "bigoqep", "ayoyemub", "enucadi", "aqofija", "anuvajaf", "evevewaqa",
    "oxelo", "ejavahag", "tariyusi", "canepos", "efequsuk", "ecuse", "izelac", "ejetu", "ijipeko", "arofe",
    "usozuges", "tixuv", "agobamume", "fuwis", "cagopecef", "ozejivozu", "veyem", "eyuvayo", "hiqose", "upogulo",
    "ojogi", "uzeno", "ojiwac", "ciminujo", "oranin", "tivay", "osifoz", "figoh", "ucovivav", "lujacaku",
    "usoyoguba", "laqel", "iyujimoz", "uwukow", "cibagageh", "gijul", "qevihep", "ituwu", "pagim", "exozo",
    "unetuc", "opisiseh", "coxen", "rubih", "zicuce", "evajoz", "mosoto", "aguha", "xikomew", "kuzetihid",
    "ezuhuwaji", "ukoxikir", "izayipur", "eqadupuy", "acocex", "ukumat", "oqazijiv", "oqejiro", "qilarab", "ajisor",
    "aloqa", "oholetone", "owoyetoco", "yusabija", "oxoxafu", "feyuleqof", "uxoxihi", "woroq", "becod", "fojutosad",
    "daqav", "oziba", "zovituw", "sihegim", "latahefi", "dibora", "referekij", "tokacevug", "yurecaf", "dosovi",
    "rudimak", "ulabitiq", "jagimuwe", "urequs", "kugequy", "ikinovati", "ramemave", "joximi", "tugilu", "lasigawu",
    "odatuh", "pucib", "upafahota", "bijocaf", "ozorejudu", "imaqonebo", "ecilate", "cahumaf", "lolisosu", "qugana",
    "maduyuf", "eyino", "ucufenot", "hefegowe", "wuqisah", "mirucom", "uquruf", "icaguc", "vatex", "udume",
    "emajociro", "beqizu", "ecasuguwu", "obima", "udijegama", "ekoxeqapo", "uvoqesu", "ecirab", "teyunawi", "zehiq",
    "voqejire", "rayow", "zequwa", "exijefa", "esawox", "dojoluzuk", "pocetez", "calocuba", "ozokucizi", "obumolefo",
    "kozike", "walus", "etewasuya", "oronuq", "izacikus", "adobe", "bidajelo", "hoveyajaz", "azevomiy", "vuwulib",
    "olufe", "pejecucoz", "wabapola", "zifuq", "ekuja", "eyimitefu", "zecimah", "ehisuwequ", "kufabexu", "nubuxur",
    "yegol", "alojihade", "ubufijow", "tubikex", "uqodu", "legaga", "tenig", "eviguduwi", "lokekizu", "fakeq",
    "qimowut", "cokeb", "kofoheyu", "meyeyab", "equwozifo", "qavomogiv", "faqaw", "ubegit", "ruhihavip", "uqelihe",
    "ezuzumuye", "situmeja", "xizafujop", "wojuhuhod", "agurife", "ohozu", "edivebu", "ubuteraga", "xulilo", "zebuwuna",
    "ecomoka", "jigijureb", "siyiseweh", "icanir", "nuyad", "lokikohah", "faban", "igokewec", "jijiva", "boboge",
    "ukaruhete", "onogemonu", "lusav", "ivujagabu", "tejir", "imejonipi", "ativup", "sobaliri", "urezom", "tefay",
    "nereri", "zucowaqiv", "avileg", "ewajojob", "eliciv", "kesorakog", "cecazulod", "tidatiji", "ezoye", "henuhal",
    "dalazike", "vegobafe", "oyubobefo", "ozexafohu", "omumul", "wupeyul", "kabujube", "samezesa", "emeti", "qorafo",
    "jegeq", "qumedogo", "muweputo", "qaboyosa", "ojutoxa", "hikoruzu", "ixujaq", "ehucu", "sukixes", "vilexela",
    "fuzakoho", "raceto", "eyufaye", "ayaloc", "soyem", "teqecasar", "amopoyeyi", "cuceduz", "denubax", "nilix",
    "rilace", "xanacizu", "cafuyoce", "tediv", "qexetezic", "owebeha", "upicidi", "vizisum", "muduq", "uciboy",
    "xivagare", "ohokiy", "apehu", "vemefexa", "igaya", "mesomih", "rofoq", "dorezev", "fofoqi", "nulujupiy",
    "jakula", "vilavahed", "sugafemuq", "ubune", "uvezopixi", "vevuk", "xenel", "goqoxuluj", "unitasapu", "cicoyes",
    "keposuk", "ulequji", "pehun", "umucoxet", "xowum", "oyine", "difitoro", "cikofoqe", "alihe", "emuxu",
    "kahav", "inubefi", "cizexupi", "pemazu", "akepig", "ilodopep", "avagon", "ugocol", "faziq", "nipihasoc",
    "unujapa", "iwejapa", "uliho", "ocayibo", "ogije", "hihexonud", "uvego", "uqeje", "eqisisaru", "newoger",
    "henij", "renamogac", "miruhoqox", "kovozek", "bugefenut", "ufutolora", "qimil", "ubenenose", "wadisecu", "suvulifad",
    "ewuwij", "oteyez", "nevavonug", "tamupucuj", "eyedono", "qunilay", "eyove", "povoxif", "udemeyi", "qaleyuy",
    "imigejeku", "oxigi", "wadaruj", "vogowepom", "ebinom", "nahefen", "cowexeri", "genibuhu", "esekaziqo", "bamoxibi",
    "ehekijipi", "akikuwow", "oduyux", "boqume", "uralucito", "jakirid", "egucebaz", "pesep", "yiwisa", "huqawu",
    "tuqozaqam", "yoyob", "eqonuluzu", "iloro", "ahubep", "akadoqa", "osinaxu", "abesoh", "huzopone", "rahiyumo",
    "asiziwemo", "ciwab", "ulebe", "rasokohi", "eveja", "uvuzic", "uhujuqabu", "dexiduho", "zumum", "amuto",
    "xugomidow", "yujuz", "tuzic", "uwuxa", "fufoj", "ideku", "xoluwilew", "sasib", "ohedat", "miwef",
    "habamuvoc", "uwejefon", "yotuji", "ipufon", "aqoxega", "exuga", "obigewahu", "bihugop", "newif", "pahujizet",
    "ejuhowuzo", "oxicot", "tejucop", "hikadez", "ecicigef", "awifaqimu", "usicibuz", "osojeru", "ruranahe", "onigal",
    "masuwo", "dicumanaf", "avepe", "odafiqipa", "wabalu", "umivu", "iwanocicu", "voriko", "adiqipajo", "gilecegor",
    "zareqidis", "anopew", "dusuyowod", "qidemem", "abilopok", "uruda", "akoru", "ibaxavuru", "vuvahax", "utozoy",
    "iwizij", "udelupiqu", "uxotuzeta", "iwukeq", "oyoneqox", "uwokayo", "alihira", "zohavit", "rudem", "bamizur",
    "ratobogoq", "zedarefaw", "posuvov", "opadec", "atifimoz", "evuvaxuy", "yequhefot", "varese", "onozi", "eteheceg",
    "ucekohuy", "viravejom", "miqit", "wesiru", "wuwah", "elahos", "uqemarop", "qayebuhin", "iguxas", "bunifajux",
    "lijini", "kisik", "yineju", "hozuja", "iculiyab", "hizuyi", "pucaz", "xeyupi", "egecedote", "lifafuf",
    "afaxilu", "ocowuma", "punom", "enoxa", "lokapal", "oyehiroba", "usuco", "cecetuci", "owato", "igavog",
    "iqijemivu", "ihomet", "tigep", "wivakuso", "ikegamif", "uyosiyom", "iporajax", "udivu", "wawuq", "cogopa",
    "hamovey", "hinededa", "ecunonala", "kazog", "bujaci", "ahevejawa", "anisubahi", "duxivan", "dalizoz", "libeh",
    "jaxohuya", "gagoxi", "uqudar", "maveqoqo", "zitimeven", "cofod", "xodela", "onaqe", "upeyalo", "rojobijuc",
    "afetej", "calazi", "uxubuceku", "uyohopa", "ikuva", "ahefuxa", "ziyos", "neyubir", "yumawiyuy", "ihumubopa",
    "umepi", "tuqivoru", "dimoz", "ruqol", "gelimapap", "ewohilela", "kizunok", "ofesaquf", "idilo", "awexuju",
    "aqipaga", "zefehena", "elexagija", "usipafu", "atewojomo", "sonajohoy", "ogiliwu", "utigupo", "payoziruq", "axusayes",
    "uculuyega", "payev", "koxojoheg", "usezo", "lazipul", "xuqotoxo", "gasecozo", "xepiden", "zeguviw", "iyevi",
    "apigecicu", "vadipuxa", "gepesiken", "yigey", "ikojiduvi", "neyivi", "barukuy", "wuconeq", "forubup", "avumocur",
    "datavici", "esefa", "javapaga", "ixovot", "vifodu", "uwuduq", "kalusup", "korufifub", "isazex", "ikaxerop",
    "acimacod", "ewuhozaxe", "fogoxila", "oruxepel", "edebuza", "iqose", "aqesukol", "damode", "hasagidi", "cubufo",
    "donatap", "yufay", "cigusaw", "odaqetey", "biguqego", "uwutujaxi", "uqenegi", "cexigamu", "diturol", "qekoxari",
    "tewiluve", "kaboz", "dediful", "ohejoderu", "gupotifu", "cegaw", "losih", "paduzovat", "javur", "situza",
    "vulovohi", "etucawi", "larejalup", "qekave", "fidasi", "omuwocuha", "movehoj", "tabewoteh", "ogajadubo", "uzegol",
    "gohud", "tubub", "uxivo", "ujebewer", "ahozor", "adepiv", "ofufotu", "tizeb", "buqopibe", "jaxeluxub",
    "urena", "doyokax", "dagum", "odokinah", "imizipaf", "midoqeba", "vatidahes", "oduki", "jeximi", "ehesat",
    "xuqigime", "mejilo", "ibiyubope", "yawob", "efajosa", "negepowe", "lulejen", "otove", "herec", "vuxod",
    "efegicul", "ovugoha", "raremuhu", "radic", "veqizef", "obelepej", "qewek", "tucufeju", "ipono", "xumen",
    "gikayix", "oxixane", "mepadigac", "aramidofo", "egozeveri", "puyusino", "ihavo", "yiven", "dezisubo", "famaya",
    "yulabuqu", "eqakoliw", "uyozayo", "ipinujuw", "cecemewe", "pefawe", "oyave", "nufon", "efudupexo", "rogiqifiy",
    "lupix", "gojijer", "qacuhoxa", "zewudaqo", "oxiqevapu", "uselupu", "ayayo", "efunoluz", "fenexidup", "enavujis",
    "kowure", "soticugeh", "jojuqil", "serorazoz", "akareyaj", "jebodir",
];

/// Lojban word list.
pub static LOJBAN: WordList = WordList {
    words: &LOJBAN_WORDS,
    english_name: "lojban",
    prefix_length: 4,
};

/// All supported languages, English first.
pub static ALL_LANGUAGES: [&'static WordList; 12] = [
    &ENGLISH,
    &SPANISH,
    &PORTUGUESE,
    &FRENCH,
    &ITALIAN,
    &GERMAN,
    &DUTCH,
    &RUSSIAN,
    &ESPERANTO,
    &JAPANESE,
    &CHINESE_SIMPLIFIED,
    &LOJBAN,
];

/// Convenience accessor for the default (English) word list.
pub fn english() -> &'static WordList {
    &ENGLISH
}
