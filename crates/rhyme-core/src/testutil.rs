use std::sync::Arc;

use crate::dict::CmuDictionary;
use crate::resolver::PhonemeResolver;

/// CMU-format fixture covering the words the unit tests use.
pub(crate) const TEST_DICT: &str = "\
;;; test fixture
a  AH0
and  AH0 N D
band  B AE1 N D
bat  B AE1 T
bed  B EH1 D
bell  B EH1 L
blue  B L UW1
bone  B OW1 N
bowl  B OW1 L
boy  B OY1
brain  B R EY1 N
brew  B R UW1
brother  B R AH1 DH ER0
cape  K EY1 P
cat  K AE1 T
creature  K R IY1 CH ER0
cut  K AH1 T
day  D EY1
dna  D IY2 EH2 N EY1
done  D AH1 N
door  D AO1 R
ever  EH1 V ER0
eureka  Y UH0 R IY1 K AH0
feature  F IY1 CH ER0
feel  F IY1 L
find  F AY1 N D
fly  F L AY1
for  F AO1 R
forever  F ER0 EH1 V ER0
free  F R IY1
get  G EH1 T
go  G OW1
goal  G OW1 L
hand  HH AE1 N D
happy  HH AE1 P IY0
hat  HH AE1 T
heat  HH IY1 T
honey  HH AH1 N IY0
i  AY1
i'm  AY1 M
in  IH0 N
is  IH1 Z
it  IH1 T
kiss  K IH1 S
land  L AE1 N D
lands  L AE1 N D Z
landscape  L AE1 N D S K EY2 P
late  L EY1 T
light  L AY1 T
make  M EY1 K
mind  M AY1 N D
miss  M IH1 S
money  M AH1 N IY0
more  M AO1 R
mother  M AH1 DH ER0
new  N UW1
night  N AY1 T
or  AO1 R
outrun  AW1 T R AH0 N
plate  P L EY1 T
play  P L EY1
rain  R EY1 N
red  R EH1 D
rhyme  R AY1 M
run  R AH1 N
say  S EY1
scape  S K EY1 P
see  S IY1
shape  SH EY1 P
sky  S K AY1
snappy  S N AE1 P IY0
soul  S OW1 L
stand  S T AE1 N D
street  S T R IY1 T
sun  S AH1 N
the  DH AH0
these  DH IY1 Z
time  T AY1 M
toy  T OY1
tree  T R IY1
true  T R UW1
war  W AO1 R
well  W EH1 L
";

pub(crate) fn test_dict() -> CmuDictionary {
    CmuDictionary::from_text(TEST_DICT).expect("test dictionary must parse")
}

pub(crate) fn test_resolver() -> PhonemeResolver {
    PhonemeResolver::new(Arc::new(test_dict()))
}
